//! Feature modules - each feature follows Hexagonal Architecture
//!
//! Each feature contains (as needed):
//! - domain/         - Pure models
//! - ports/          - Interface definitions (traits)
//! - infrastructure/ - Implementations
//!
//! Dependency order, leaves first:
//! term → facts → dug → slicing → dataflow → vc

/// Symbolic terms and formulas, expression conversion
pub mod term;

/// Per-node fact generation and contradiction filtering
pub mod facts;

/// Def-use graph and its builders
pub mod dug;

/// Same-procedure backward slicing around an alarm
pub mod slicing;

/// Worklist fixpoint over fact sets
pub mod dataflow;

/// Verification conditions and the decision seam
pub mod vc;
