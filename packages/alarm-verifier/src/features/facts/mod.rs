//! Per-Node Fact Semantics and Contradiction Filter
//!
//! ```text
//! facts
//! ├── domain/           # FactSet
//! └── infrastructure/
//!     ├── semantics     # Command → generated facts
//!     └── contradiction # syntactic contradiction filter
//! ```

pub mod domain;
pub mod infrastructure;

pub use domain::{is_contradiction_free, FactSet};
pub use infrastructure::{condition_fact, filter_contradictions, generate_facts};
