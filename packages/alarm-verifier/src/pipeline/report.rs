//! Verification report

use crate::errors::Result;
use crate::shared::models::Alarm;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Outcome for one unresolved alarm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmVerdict {
    pub alarm: Alarm,

    /// Rendered VC; `None` when verification was skipped
    pub vc: Option<String>,

    /// Whether the decision procedure accepted the VC
    pub discharged: bool,

    /// Nodes in the sliced graph
    pub slice_size: usize,

    /// Worklist pops spent on the fixpoint
    pub iterations: usize,

    /// False when the solver hit its iteration cap
    pub converged: bool,
}

impl AlarmVerdict {
    /// Verdict for an alarm that was not looked at
    pub fn skipped(alarm: Alarm) -> Self {
        Self {
            alarm,
            vc: None,
            discharged: false,
            slice_size: 0,
            iterations: 0,
            converged: true,
        }
    }
}

/// Verdicts for every unresolved alarm, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Decision procedure name
    pub decision: String,

    pub verdicts: Vec<AlarmVerdict>,
}

impl VerificationReport {
    pub fn new(decision: impl Into<String>) -> Self {
        Self {
            decision: decision.into(),
            verdicts: Vec::new(),
        }
    }

    pub fn push(&mut self, verdict: AlarmVerdict) {
        self.verdicts.push(verdict);
    }

    pub fn discharged_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.discharged).count()
    }

    pub fn remaining_count(&self) -> usize {
        self.verdicts.len() - self.discharged_count()
    }

    /// Alarms whose VC was not discharged
    pub fn remaining_alarms(&self) -> Vec<Alarm> {
        self.verdicts
            .iter()
            .filter(|v| !v.discharged)
            .map(|v| v.alarm.clone())
            .collect()
    }

    /// Consume into the alarms still to report
    pub fn into_remaining(self) -> Vec<Alarm> {
        self.verdicts
            .into_iter()
            .filter(|v| !v.discharged)
            .map(|v| v.alarm)
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to `path`
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{AlarmExp, Exp, Location, Node, VarInfo};

    fn alarm(i: usize) -> Alarm {
        Alarm::unproven(
            Node::new("main", i),
            AlarmExp::DerefExp {
                exp: Exp::var(VarInfo::local("p")),
                loc: Location::new("t.c", i as u32),
            },
        )
    }

    #[test]
    fn test_counts_and_remaining() {
        let mut report = VerificationReport::new("assume_valid");
        report.push(AlarmVerdict {
            discharged: true,
            vc: Some("true".into()),
            ..AlarmVerdict::skipped(alarm(1))
        });
        report.push(AlarmVerdict::skipped(alarm(2)));

        assert_eq!(report.discharged_count(), 1);
        assert_eq!(report.remaining_count(), 1);
        assert_eq!(report.remaining_alarms(), vec![alarm(2)]);
        assert_eq!(report.into_remaining(), vec![alarm(2)]);
    }

    #[test]
    fn test_json_export() {
        let mut report = VerificationReport::new("reject_all");
        report.push(AlarmVerdict::skipped(alarm(1)));

        let json = report.to_json().unwrap();
        let back: VerificationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
        assert!(json.contains("\"decision\": \"reject_all\""));
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let mut report = VerificationReport::new("assume_valid");
        report.push(AlarmVerdict {
            discharged: true,
            vc: Some("i < arrsize(a)".into()),
            slice_size: 3,
            ..AlarmVerdict::skipped(alarm(4))
        });
        report.write_json(&path).unwrap();

        let back: VerificationReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, report);
        assert!(report.write_json(dir.path().join("missing/report.json")).is_err());
    }
}
