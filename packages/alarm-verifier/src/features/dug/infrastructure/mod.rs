//! Def-use graph builders

pub mod reaching_defs;

pub use reaching_defs::ReachingDefBuilder;
