//! VC construction and baseline decision procedures

pub mod decision;
pub mod vc_builder;

pub use decision::{AssumeValid, RejectAll};
pub use vc_builder::{build_vc, obligation};
