//! Per-Node Fact Semantics
//!
//! Facts a command introduces:
//!
//! | Command                              | Facts                          |
//! |--------------------------------------|--------------------------------|
//! | `lv = e` (both convertible)          | `lv = e`                       |
//! | `lv = <external>`                    | none                           |
//! | `lv = alloc([n])`, `lv` a variable   | `arrsize(lv) = n`              |
//! | `assume(!c)`                         | `!(fact(c))`                   |
//! | `assume(e1 < e2)`                    | `e1 < e2`                      |
//! | `x = phi(y, z)`                      | `(x = y \|\| x = z)`           |
//! | anything else                        | none                           |
//!
//! Omission is always the fallback: a missing fact only loses precision.

use crate::features::facts::domain::FactSet;
use crate::features::term::{convert, convert_lval, ConversionResult, Formula, Term};
use crate::shared::models::{AllocKind, BinOp, Command, Exp, Lval, UnOp};
use tracing::trace;

const PHI: &str = "phi";

/// Facts generated by one command
pub fn generate_facts(cmd: &Command) -> FactSet {
    let fact = match cmd {
        Command::Set { lval, exp } => {
            guarded(cmd, convert_lval(lval).and_then(|l| Ok(Formula::eq(l, convert(exp)?))))
        }
        Command::Alloc {
            lval,
            kind: AllocKind::Array(size),
        } => match lval.as_bare_var() {
            Some(vi) => guarded(
                cmd,
                convert(size).map(|n| Formula::eq(Term::array_size(Term::var(vi.name.as_str())), n)),
            ),
            None => None,
        },
        Command::Call {
            ret: Some(lval),
            args,
            ..
        } if cmd.callee_name() == Some(PHI) => phi_fact(cmd, lval, args),
        Command::Assume(cond) => condition_fact(cond),
        Command::External { .. }
        | Command::Call { .. }
        | Command::Return(_)
        | Command::Skip => None,
    };

    fact.into_iter().collect()
}

/// Fact implied by a branch condition, if its shape is understood
pub fn condition_fact(cond: &Exp) -> Option<Formula> {
    match cond {
        Exp::UnOp(UnOp::LNot, inner) => condition_fact(inner).map(Formula::not),
        Exp::BinOp(BinOp::Lt, lhs, rhs) => match (convert(lhs), convert(rhs)) {
            (Ok(l), Ok(r)) => Some(Formula::lt(l, r)),
            (Err(e), _) | (_, Err(e)) => {
                trace!("assume({}) contributes nothing: {}", cond, e);
                None
            }
        },
        _ => None,
    }
}

fn phi_fact(cmd: &Command, lval: &Lval, args: &[Exp]) -> Option<Formula> {
    let [first, second] = args else {
        return None;
    };
    let (a1, a2) = (first.as_bare_var()?, second.as_bare_var()?);
    let result = guarded(cmd, convert_lval(lval))?;

    Some(Formula::or(
        Formula::eq(result.clone(), Term::var(a1.name.as_str())),
        Formula::eq(result, Term::var(a2.name.as_str())),
    ))
}

/// Turn a conversion failure into "no contribution"
fn guarded<T>(cmd: &Command, result: ConversionResult<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            trace!("{} contributes nothing: {}", cmd, e);
            None
        }
    }
}
