//! Boolean expression tree over guards

use std::fmt;
use std::str::FromStr;

use super::{Check, Guard};
use crate::{ParseError, Version};

/// How the two children of a [`Constraint::Node`] are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Union {
    And,
    Or,
}

impl Union {
    pub fn as_str(&self) -> &'static str {
        match self {
            Union::And => ",",
            Union::Or => " ||",
        }
    }
}

/// A version constraint: a guard, or two sub-constraints joined by AND/OR.
///
/// Each node owns its children. A node built from a single-bound term has
/// no right child and [`Union::Or`], so only the left side is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    Guard(Guard),
    Node {
        left: Box<Constraint>,
        right: Option<Box<Constraint>>,
        union: Union,
    },
}

impl Constraint {
    /// Parse a full constraint expression such as `>=1.0, <2.0 || ^3.1`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        crate::constraint_parser::parse_constraint(input)
    }

    /// Wrap the guard pair produced for one term.
    pub fn from_guards(left: Guard, right: Option<Guard>, union: Union) -> Self {
        Constraint::Node {
            left: Box::new(Constraint::Guard(left)),
            right: right.map(|guard| Box::new(Constraint::Guard(guard))),
            union,
        }
    }

    pub fn and(left: Constraint, right: Constraint) -> Self {
        Constraint::Node {
            left: Box::new(left),
            right: Some(Box::new(right)),
            union: Union::And,
        }
    }

    pub fn or(left: Constraint, right: Constraint) -> Self {
        Constraint::Node {
            left: Box::new(left),
            right: Some(Box::new(right)),
            union: Union::Or,
        }
    }

    /// Number of levels in the tree; a bare guard has depth 1.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut level = 0;
        let mut node = self;
        loop {
            level += 1;
            match node {
                Constraint::Guard(_) => return depth.max(level),
                Constraint::Node { left, right, .. } => {
                    depth = depth.max(level + left.depth());
                    match right {
                        Some(right) => node = right,
                        None => return depth,
                    }
                }
            }
        }
    }
}

/// Fold `constraints` into a right-leaning chain joined by `union`.
///
/// The last constraint is the innermost right child: `[a, b, c]` becomes
/// `a ∘ (b ∘ c)`. Returns `None` for an empty input.
pub fn compact(constraints: Vec<Constraint>, union: Union) -> Option<Constraint> {
    let mut rest = constraints.into_iter().rev();
    let mut folded = rest.next()?;
    for constraint in rest {
        folded = Constraint::Node {
            left: Box::new(constraint),
            right: Some(Box::new(folded)),
            union,
        };
    }
    Some(folded)
}

// Parsed trees lean right with one level per term, so the right spine is
// walked in a loop. Left children are single terms or whole clauses, which
// are walked the same way.
impl Check for Constraint {
    fn check(&self, version: &Version) -> bool {
        let mut node = self;
        loop {
            match node {
                Constraint::Guard(guard) => return guard.check(version),
                Constraint::Node { left, right, union } => {
                    let matched = left.check(version);
                    match (union, right) {
                        (Union::And, _) if !matched => return false,
                        (Union::Or, _) if matched => return true,
                        (_, Some(right)) => node = right,
                        (_, None) => return matched,
                    }
                }
            }
        }
    }
}

impl Drop for Constraint {
    fn drop(&mut self) {
        let mut next = match self {
            Constraint::Node { right, .. } => right.take(),
            Constraint::Guard(_) => None,
        };
        while let Some(mut node) = next {
            next = match node.as_mut() {
                Constraint::Node { right, .. } => right.take(),
                Constraint::Guard(_) => None,
            };
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut node = self;
        let mut open = 0;
        loop {
            match node {
                Constraint::Guard(guard) => {
                    write!(f, "{}", guard)?;
                    break;
                }
                Constraint::Node { left, right: None, .. } => {
                    write!(f, "{}", left)?;
                    break;
                }
                Constraint::Node {
                    left,
                    right: Some(right),
                    union,
                } => {
                    write!(f, "[{}{} ", left, union.as_str())?;
                    open += 1;
                    node = right;
                }
            }
        }
        for _ in 0..open {
            f.write_str("]")?;
        }
        Ok(())
    }
}

impl FromStr for Constraint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraint::parse(s)
    }
}
