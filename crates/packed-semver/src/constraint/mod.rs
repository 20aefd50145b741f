//! Constraint types for version matching

mod check;
mod guard;
mod operator;
pub(crate) mod range;
mod tree;

pub use check::Check;
pub use guard::{Guard, GuardKind};
pub use operator::Operator;
pub use tree::{compact, Constraint, Union};
