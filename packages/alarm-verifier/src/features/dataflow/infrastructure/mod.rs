//! Fixpoint solvers

pub mod worklist_solver;

pub use worklist_solver::{WorklistFactSolver, DEFAULT_MAX_ITERATIONS};
