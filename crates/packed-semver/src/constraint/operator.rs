//! Operator types for version constraints

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use super::range::{self, RangeRule};

/// Range operators recognised in front of a constraint term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Exact match, or a wildcard range (`1.2.3`, `=1.2.*`)
    TildeOrEqual,
    /// Outside the equivalent exact/wildcard range (!=)
    NotEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=, =>)
    GreaterOrEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=, =<)
    LessOrEqual,
    /// Patch-level updates (~, ~>)
    Tilde,
    /// Compatible updates (^)
    Caret,
}

lazy_static! {
    static ref SPELLINGS: HashMap<&'static str, Operator> = {
        let mut m = HashMap::new();
        m.insert("", Operator::TildeOrEqual);
        m.insert("=", Operator::TildeOrEqual);
        m.insert("!=", Operator::NotEqual);
        m.insert(">", Operator::GreaterThan);
        m.insert(">=", Operator::GreaterOrEqual);
        m.insert("=>", Operator::GreaterOrEqual);
        m.insert("<", Operator::LessThan);
        m.insert("<=", Operator::LessOrEqual);
        m.insert("=<", Operator::LessOrEqual);
        m.insert("~", Operator::Tilde);
        m.insert("~>", Operator::Tilde);
        m.insert("^", Operator::Caret);
        m
    };
}

impl Operator {
    /// Look up an operator by one of its spellings.
    pub fn from_spelling(s: &str) -> Option<Self> {
        SPELLINGS.get(s).copied()
    }

    /// Canonical spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::TildeOrEqual => "=",
            Operator::NotEqual => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessOrEqual => "<=",
            Operator::Tilde => "~",
            Operator::Caret => "^",
        }
    }

    /// All recognised spellings, including the empty one.
    pub fn supported_operators() -> &'static [&'static str] {
        &["", "=", "!=", ">", ">=", "=>", "<", "<=", "=<", "~", "~>", "^"]
    }

    /// The range expansion rule for this operator.
    pub(crate) fn rule(&self) -> RangeRule {
        match self {
            Operator::TildeOrEqual => range::tilde_or_equal,
            Operator::NotEqual => range::not_equal,
            Operator::GreaterThan => range::greater_than,
            Operator::GreaterOrEqual => range::greater_or_equal,
            Operator::LessThan => range::less_than,
            Operator::LessOrEqual => range::less_or_equal,
            Operator::Tilde => range::tilde,
            Operator::Caret => range::caret,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
