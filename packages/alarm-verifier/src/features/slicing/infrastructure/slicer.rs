/*
 * Def-Use Graph Slicer
 *
 * Backward closure over def-use predecessors, restricted to the
 * procedure that owns the target node:
 *
 *   S := {target}
 *   repeat S := S ∪ { p | p ∈ preds(s), s ∈ S, proc(p) = proc(target) }
 *   until S stops growing
 *   return project(graph, S)
 *
 * The target is always part of the result, even when the base graph
 * does not know it (it then appears as an isolated node).
 */

use crate::features::dug::DefUseGraph;
use crate::shared::models::Node;
use std::collections::{BTreeSet, VecDeque};
use tracing::debug;

/// Slice configuration
#[derive(Debug, Clone)]
pub struct SliceConfig {
    /// Stop at procedure boundaries
    pub same_procedure_only: bool,
}

impl Default for SliceConfig {
    fn default() -> Self {
        SliceConfig {
            same_procedure_only: true,
        }
    }
}

/// Backward slicer over a def-use graph
#[derive(Debug, Clone, Default)]
pub struct DugSlicer {
    config: SliceConfig,
}

impl DugSlicer {
    /// Create new slicer with default config
    pub fn new() -> Self {
        Self::with_config(SliceConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: SliceConfig) -> Self {
        DugSlicer { config }
    }

    /// Nodes of the backward slice from `target`
    pub fn slice_nodes(&self, graph: &DefUseGraph, target: &Node) -> BTreeSet<Node> {
        let mut visited = BTreeSet::from([target.clone()]);
        let mut queue = VecDeque::from([target]);

        while let Some(node) = queue.pop_front() {
            for pred in graph.predecessors(node) {
                if self.config.same_procedure_only && !pred.same_procedure(target) {
                    continue;
                }
                if visited.insert(pred.clone()) {
                    queue.push_back(pred);
                }
            }
        }

        visited
    }

    /// Sliced graph around `target`
    pub fn slice(&self, graph: &DefUseGraph, target: &Node) -> DefUseGraph {
        let nodes = self.slice_nodes(graph, target);
        let mut sliced = graph.project(&nodes);
        sliced.add_node(target.clone());

        debug!(
            "slice at {}: {} of {} nodes, {} edges",
            target,
            sliced.node_count(),
            graph.node_count(),
            sliced.edge_count()
        );
        sliced
    }
}
