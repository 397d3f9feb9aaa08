//! Common test utilities for alarm-verifier
//!
//! Builders for programs, def-use graphs and alarms.

#![allow(dead_code)]

mod builders;

pub use builders::*;
