//! Term domain models

pub mod formula;
pub mod term;

pub use formula::Formula;
pub use term::Term;
