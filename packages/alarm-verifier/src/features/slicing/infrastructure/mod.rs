//! Slicer implementation

pub mod slicer;

pub use slicer::{DugSlicer, SliceConfig};
