//! Verification Condition Builder
//!
//! ```text
//! alarm a[i]           → i < arrsize(a)
//! alarm *(base + i)    → i < arrsize(base)
//! anything else        → true
//! VC                   = obligation ∧ f1 ∧ f2 ∧ ...   (facts at the alarm node)
//! ```
//!
//! Only the upper bound is checked. The numeric tables are accepted but
//! not consulted yet.

use crate::features::dataflow::DataflowTable;
use crate::features::term::{convert, convert_lval, ConversionResult, Formula, Term};
use crate::shared::models::{Alarm, AlarmExp, BinOp, Exp, MemoryTable};
use tracing::trace;

/// Safety obligation of an alarm expression
pub fn obligation(exp: &AlarmExp) -> Formula {
    let bound: Option<ConversionResult<Formula>> = match exp {
        AlarmExp::ArrayExp { lval, index, .. } => Some(
            convert_lval(lval)
                .and_then(|arr| Ok(Formula::lt(convert(index)?, Term::array_size(arr)))),
        ),
        AlarmExp::DerefExp { exp: target, .. } => match strip_casts(target) {
            Exp::BinOp(BinOp::PlusPI | BinOp::IndexPI | BinOp::PlusA, base, idx) => Some(
                convert(base)
                    .and_then(|b| Ok(Formula::lt(convert(idx)?, Term::array_size(b)))),
            ),
            _ => None,
        },
        AlarmExp::DivExp { .. } | AlarmExp::BufferOverrunLib { .. } => None,
    };

    match bound {
        Some(Ok(f)) => f,
        Some(Err(e)) => {
            trace!("obligation for {} is trivial: {}", exp, e);
            Formula::True
        }
        None => Formula::True,
    }
}

fn strip_casts(e: &Exp) -> &Exp {
    match e {
        Exp::Cast(_, inner) => strip_casts(inner),
        other => other,
    }
}

/// VC for `alarm`: its obligation conjoined with every fact the sliced
/// fixpoint stored at the alarm node, in fact order.
///
/// `_input` is the numeric table at entry; obligations do not read it yet.
pub fn build_vc<M>(alarm: &Alarm, _input: &MemoryTable<M>, table: &DataflowTable) -> Formula {
    Formula::conjoin(obligation(&alarm.exp), table.facts_at(&alarm.node))
}
