//! Def-use graph builder port
//!
//! The access/SSA analysis that normally produces the base graph lives
//! outside this crate. Anything that can turn a program into a
//! [`DefUseGraph`] plugs in here.

use crate::features::dug::domain::DefUseGraph;
use crate::shared::models::ProgramPort;

/// Builds the whole-program def-use graph
pub trait DefUseGraphBuilder {
    fn build(&self, program: &dyn ProgramPort) -> DefUseGraph;
}
