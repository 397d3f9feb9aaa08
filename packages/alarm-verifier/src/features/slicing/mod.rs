//! Graph Slicer
//!
//! Backward, same-procedure slice of the def-use graph around one alarm.

pub mod infrastructure;

pub use infrastructure::{DugSlicer, SliceConfig};
