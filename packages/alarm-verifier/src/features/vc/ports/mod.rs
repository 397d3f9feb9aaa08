//! Decision procedure port
//!
//! A verification condition is discharged when the procedure reports it
//! valid. Real solvers plug in here; closures work too:
//!
//! ```text
//! let never = |_: &Formula| false;
//! verifier.with_decision(never);
//! ```

use crate::features::term::Formula;

/// Decides validity of a verification condition
pub trait DecisionProcedure {
    /// Name used in logs and reports
    fn name(&self) -> &str {
        "custom"
    }

    /// Whether `vc` holds
    fn is_valid(&self, vc: &Formula) -> bool;
}

impl<F> DecisionProcedure for F
where
    F: Fn(&Formula) -> bool,
{
    fn is_valid(&self, vc: &Formula) -> bool {
        self(vc)
    }
}
