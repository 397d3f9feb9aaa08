//! Arithmetic terms

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arithmetic term over program variables.
///
/// Variables are identified by name only; pointer indirections are
/// flattened into names such as `p->len` or `p->this`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Var(String),
    Int(i64),
    Mul(Box<Term>, Box<Term>),
    Add(Box<Term>, Box<Term>),
    Sub(Box<Term>, Box<Term>),
    /// Symbolic capacity of the array the term points to
    ArraySize(Box<Term>),
    /// `sizeof` applied to an expression
    SizeOf(Box<Term>),
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(name.into())
    }

    pub fn int(value: i64) -> Self {
        Term::Int(value)
    }

    pub fn mul(lhs: Term, rhs: Term) -> Self {
        Term::Mul(Box::new(lhs), Box::new(rhs))
    }

    pub fn add(lhs: Term, rhs: Term) -> Self {
        Term::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn sub(lhs: Term, rhs: Term) -> Self {
        Term::Sub(Box::new(lhs), Box::new(rhs))
    }

    pub fn array_size(t: Term) -> Self {
        Term::ArraySize(Box::new(t))
    }

    pub fn size_of(t: Term) -> Self {
        Term::SizeOf(Box::new(t))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) => f.write_str(name),
            Term::Int(i) => write!(f, "{}", i),
            Term::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Term::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Term::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Term::ArraySize(t) => write!(f, "arrsize({})", t),
            Term::SizeOf(t) => write!(f, "sizeof({})", t),
        }
    }
}
