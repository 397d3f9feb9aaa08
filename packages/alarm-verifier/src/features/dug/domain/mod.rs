//! Def-use graph domain

mod def_use_graph;

pub use def_use_graph::DefUseGraph;
