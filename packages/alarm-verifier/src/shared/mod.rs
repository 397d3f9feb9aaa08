//! Shared models consumed by every feature
//!
//! The program representation here stands in for the external C front end:
//! features only read it.

pub mod models;
