pub mod contradiction;
pub mod semantics;

pub use contradiction::filter_contradictions;
pub use semantics::{condition_fact, generate_facts};
