//! Expression Converter
//!
//! Maps program expressions into [`Term`]s. Only a small grammar is
//! supported:
//!
//! ```text
//! exp ::= int                     → Int
//!       | x                       → Var("x")
//!       | base->field             → Var("base->field")   (local or global base)
//!       | *base                   → Var("base->this")    (local base only)
//!       | exp + exp               → Add
//!       | (typ) exp               → exp
//!       | sizeof(exp)             → SizeOf
//! ```
//!
//! Everything else is [`ConversionError::NotConvertible`]. That is an
//! expected outcome: callers turn it into "no fact" or a trivial
//! obligation, never into a partial term.

use crate::features::term::domain::Term;
use crate::shared::models::{BinOp, Constant, Exp, LHost, Lval, Offset};
use thiserror::Error;

/// Why an expression has no term
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("expression not convertible to a term: {expr}")]
    NotConvertible { expr: String },
}

impl ConversionError {
    fn exp(e: &Exp) -> Self {
        ConversionError::NotConvertible {
            expr: e.to_string(),
        }
    }

    fn lval(lv: &Lval) -> Self {
        ConversionError::NotConvertible {
            expr: lv.to_string(),
        }
    }
}

pub type ConversionResult<T> = std::result::Result<T, ConversionError>;

/// Convert an expression
pub fn convert(e: &Exp) -> ConversionResult<Term> {
    match e {
        Exp::Const(Constant::Int(i)) => Ok(Term::Int(*i)),
        Exp::Lval(lv) => convert_lval(lv),
        Exp::BinOp(BinOp::PlusA, lhs, rhs) => Ok(Term::add(convert(lhs)?, convert(rhs)?)),
        Exp::Cast(_, inner) => convert(inner),
        Exp::SizeOfE(inner) => Ok(Term::size_of(convert(inner)?)),
        _ => Err(ConversionError::exp(e)),
    }
}

/// Convert an lvalue
pub fn convert_lval(lv: &Lval) -> ConversionResult<Term> {
    match (&lv.host, &lv.offset) {
        (LHost::Var(vi), Offset::NoOffset) => Ok(Term::var(vi.name.as_str())),
        (LHost::Mem(base), Offset::Field(field, rest)) if **rest == Offset::NoOffset => {
            match base.as_bare_var() {
                Some(vi) => Ok(Term::var(format!("{}->{}", vi.name, field))),
                None => Err(ConversionError::lval(lv)),
            }
        }
        (LHost::Mem(base), Offset::NoOffset) => match base.as_bare_var() {
            Some(vi) if !vi.is_global => Ok(Term::var(format!("{}->this", vi.name))),
            _ => Err(ConversionError::lval(lv)),
        },
        _ => Err(ConversionError::lval(lv)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Typ, UnOp, VarInfo};

    fn x() -> Exp {
        Exp::var(VarInfo::local("x"))
    }

    #[test]
    fn test_literal_and_variable() {
        assert_eq!(convert(&Exp::int(42)), Ok(Term::int(42)));
        assert_eq!(convert(&x()), Ok(Term::var("x")));
        assert_eq!(
            convert(&Exp::var(VarInfo::global("g"))),
            Ok(Term::var("g"))
        );
    }

    #[test]
    fn test_field_through_pointer() {
        let local = Exp::Lval(Lval::arrow(VarInfo::local("p"), "len"));
        let global = Exp::Lval(Lval::arrow(VarInfo::global("q"), "cap"));
        assert_eq!(convert(&local), Ok(Term::var("p->len")));
        assert_eq!(convert(&global), Ok(Term::var("q->cap")));
    }

    #[test]
    fn test_deref_of_local_pointer_only() {
        let local = Exp::Lval(Lval::mem(Exp::var(VarInfo::local("p"))));
        let global = Exp::Lval(Lval::mem(Exp::var(VarInfo::global("q"))));
        assert_eq!(convert(&local), Ok(Term::var("p->this")));
        assert!(convert(&global).is_err());
    }

    #[test]
    fn test_addition_cast_and_sizeof() {
        let e = Exp::plus(Exp::cast(Typ::Int, x()), Exp::int(1));
        assert_eq!(convert(&e), Ok(Term::add(Term::var("x"), Term::int(1))));

        let s = Exp::size_of_exp(x());
        assert_eq!(convert(&s), Ok(Term::size_of(Term::var("x"))));
    }

    #[test]
    fn test_unsupported_shapes_fail() {
        let unsupported = vec![
            Exp::binop(BinOp::MinusA, x(), Exp::int(1)),
            Exp::binop(BinOp::Mult, x(), Exp::int(2)),
            Exp::unop(UnOp::Neg, x()),
            Exp::Const(Constant::Str("abc".into())),
            Exp::SizeOf(Typ::Int),
            Exp::AddrOf(Lval::var(VarInfo::local("x"))),
            Exp::Lval(Lval::index(VarInfo::local("a"), Exp::int(0))),
            Exp::Lval(Lval::mem(Exp::plus(x(), Exp::int(1)))),
        ];
        for e in unsupported {
            assert!(
                matches!(convert(&e), Err(ConversionError::NotConvertible { .. })),
                "{} should not convert",
                e
            );
        }
    }

    #[test]
    fn test_failure_inside_addition_fails_whole() {
        let e = Exp::plus(x(), Exp::binop(BinOp::Mult, x(), x()));
        assert!(convert(&e).is_err());
    }

    #[test]
    fn test_two_level_field_fails() {
        let lv = Lval {
            host: LHost::Mem(Box::new(Exp::var(VarInfo::local("p")))),
            offset: Offset::Field(
                "inner".into(),
                Box::new(Offset::Field("len".into(), Box::new(Offset::NoOffset))),
            ),
        };
        assert!(convert_lval(&lv).is_err());
    }
}
