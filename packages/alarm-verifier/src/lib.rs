/*
 * Alarm Verifier - path-sensitive false alarm discharge
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Program representation (Node, Exp, Command, Alarm)
 * - features/    : Vertical slices (term → facts → dug → slicing → dataflow → vc)
 * - pipeline/    : Per-alarm orchestration
 * - config/      : Verifier configuration (YAML v1)
 *
 * For every alarm the numeric analysis left unresolved:
 *   slice DUG → worklist fixpoint over facts → build VC → decide
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

/// Shared program models
pub mod shared;

/// Feature modules
pub mod features;

/// Per-alarm verification pipeline
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

/// Diagnostic output setup
pub mod logging;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{DecisionKind, VerifierConfig};
pub use errors::{Result, VerifierError};
pub use features::term::{Formula, Term};
pub use pipeline::{verify_all, AlarmVerdict, AlarmVerifier, VerificationReport};
pub use shared::models::{Alarm, AlarmExp, AlarmStatus, Command, Exp, Lval, MemoryTable, Node, Program};
