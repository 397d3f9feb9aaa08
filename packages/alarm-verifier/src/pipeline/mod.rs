//! Per-alarm verification pipeline
//!
//! ```text
//! program ─► DefUseGraphBuilder ─► base DUG
//!                                    │
//!   for each unresolved alarm:       ▼
//!     DugSlicer ─► WorklistFactSolver ─► build_vc ─► DecisionProcedure
//! ```

pub mod orchestrator;
pub mod report;

pub use orchestrator::{verify_all, AlarmVerifier};
pub use report::{AlarmVerdict, VerificationReport};
