//! Def-Use Graph
//!
//! ```text
//! dug
//! ├── domain/           # DefUseGraph (petgraph-backed)
//! ├── ports/            # DefUseGraphBuilder
//! └── infrastructure/   # ReachingDefBuilder
//! ```

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::DefUseGraph;
pub use infrastructure::ReachingDefBuilder;
pub use ports::DefUseGraphBuilder;
