//! Verifier configuration

use super::error::{ConfigError, ConfigResult};
use crate::features::dataflow::DEFAULT_MAX_ITERATIONS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound accepted for `max_iterations`
pub const MAX_ITERATIONS_LIMIT: usize = 10_000_000;

/// Which built-in decision procedure discharges VCs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    /// Every VC is valid
    #[default]
    AssumeValid,
    /// No VC is valid
    RejectAll,
}

impl FromStr for DecisionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "assume_valid" => Ok(DecisionKind::AssumeValid),
            "reject_all" => Ok(DecisionKind::RejectAll),
            _ => Err(ConfigError::UnknownDecision(s.to_string())),
        }
    }
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionKind::AssumeValid => write!(f, "assume_valid"),
            DecisionKind::RejectAll => write!(f, "reject_all"),
        }
    }
}

/// Alarm verifier configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Run the verifier at all; when off every unresolved alarm is kept
    pub enabled: bool,

    /// Slice within the alarm's procedure only
    pub same_procedure_only: bool,

    /// Worklist solver max iterations (1..=10000000)
    pub max_iterations: usize,

    /// Decision procedure for VCs
    pub decision: DecisionKind,

    /// Log the rendered VC after each alarm
    pub log_vc: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            same_procedure_only: true,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            decision: DecisionKind::AssumeValid,
            log_vc: true,
        }
    }
}

impl VerifierConfig {
    pub fn enabled(mut self, v: bool) -> Self {
        self.enabled = v;
        self
    }

    pub fn same_procedure_only(mut self, v: bool) -> Self {
        self.same_procedure_only = v;
        self
    }

    pub fn max_iterations(mut self, v: usize) -> Self {
        self.max_iterations = v;
        self
    }

    pub fn decision(mut self, v: DecisionKind) -> Self {
        self.decision = v;
        self
    }

    pub fn log_vc(mut self, v: bool) -> Self {
        self.log_vc = v;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_iterations == 0 || self.max_iterations > MAX_ITERATIONS_LIMIT {
            return Err(ConfigError::range_with_hint(
                "max_iterations",
                self.max_iterations,
                1,
                MAX_ITERATIONS_LIMIT,
                "Worklist iterations must be finite",
            ));
        }
        Ok(())
    }
}
