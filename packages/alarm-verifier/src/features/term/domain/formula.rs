//! Boolean formulas over terms

use super::term::Term;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean formula. Pure value: equality and ordering are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Formula {
    True,
    False,
    Not(Box<Formula>),
    Eq(Term, Term),
    Lt(Term, Term),
    Le(Term, Term),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn not(f: Formula) -> Self {
        Formula::Not(Box::new(f))
    }

    pub fn eq(lhs: Term, rhs: Term) -> Self {
        Formula::Eq(lhs, rhs)
    }

    pub fn lt(lhs: Term, rhs: Term) -> Self {
        Formula::Lt(lhs, rhs)
    }

    pub fn le(lhs: Term, rhs: Term) -> Self {
        Formula::Le(lhs, rhs)
    }

    pub fn and(lhs: Formula, rhs: Formula) -> Self {
        Formula::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Formula, rhs: Formula) -> Self {
        Formula::Or(Box::new(lhs), Box::new(rhs))
    }

    /// Left-nested conjunction of `first` with every formula in `rest`
    pub fn conjoin<'a, I>(first: Formula, rest: I) -> Self
    where
        I: IntoIterator<Item = &'a Formula>,
    {
        rest.into_iter()
            .fold(first, |acc, f| Formula::and(acc, f.clone()))
    }

    /// Syntactic negation: strips one `Not`, otherwise wraps in `Not`.
    pub fn negation(&self) -> Formula {
        match self {
            Formula::Not(inner) => (**inner).clone(),
            other => Formula::not(other.clone()),
        }
    }

    /// Whether the formula is false by its shape alone: the literal
    /// `false`, `!true`, or a formula equal to its own negation.
    ///
    /// Comparisons are never evaluated, so `3 < 2` and `x < x` are kept.
    pub fn is_self_contradictory(&self) -> bool {
        match self {
            Formula::False => true,
            Formula::Not(inner) if **inner == Formula::True => true,
            other => *other == other.negation(),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::True => f.write_str("true"),
            Formula::False => f.write_str("false"),
            Formula::Not(inner) => write!(f, "!({})", inner),
            Formula::Eq(lhs, rhs) => write!(f, "{} = {}", lhs, rhs),
            Formula::Lt(lhs, rhs) => write!(f, "{} < {}", lhs, rhs),
            Formula::Le(lhs, rhs) => write!(f, "{} <= {}", lhs, rhs),
            Formula::And(lhs, rhs) => write!(f, "({} && {})", lhs, rhs),
            Formula::Or(lhs, rhs) => write!(f, "({} || {})", lhs, rhs),
        }
    }
}
