//! Worklist Dataflow Engine
//!
//! ```text
//! dataflow
//! ├── domain/           # DataflowTable, FixpointResult
//! └── infrastructure/   # WorklistFactSolver
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{DataflowTable, FixpointResult};
pub use infrastructure::{WorklistFactSolver, DEFAULT_MAX_ITERATIONS};
