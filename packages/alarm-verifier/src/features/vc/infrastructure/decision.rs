//! Baseline decision procedures

use crate::features::term::Formula;
use crate::features::vc::ports::DecisionProcedure;

/// Accepts every VC.
///
/// Stand-in until a solver is attached: every alarm that reaches the
/// decision step is discharged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeValid;

impl DecisionProcedure for AssumeValid {
    fn name(&self) -> &str {
        "assume_valid"
    }

    fn is_valid(&self, _vc: &Formula) -> bool {
        true
    }
}

/// Rejects every VC, so every unresolved alarm is reported
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAll;

impl DecisionProcedure for RejectAll {
    fn name(&self) -> &str {
        "reject_all"
    }

    fn is_valid(&self, _vc: &Formula) -> bool {
        false
    }
}
