//! Def-use graph

use crate::shared::models::Node;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;
use std::fmt;

/// Directed graph over program points: an edge `d → u` means a value
/// defined at `d` may be read at `u`.
///
/// Node and edge insertion are idempotent. All queries return nodes in
/// `Node` order, so anything iterating a graph is deterministic.
#[derive(Debug, Clone, Default)]
pub struct DefUseGraph {
    graph: DiGraph<Node, ()>,

    /// Node → index mapping
    index: FxHashMap<Node, NodeIndex>,
}

impl DefUseGraph {
    /// Create empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node (no-op if present)
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.index.insert(node, idx);
        idx
    }

    /// Add an edge, creating missing endpoints (no-op if present)
    pub fn add_edge(&mut self, from: Node, to: Node) {
        let src = self.add_node(from);
        let dst = self.add_node(to);
        if self.graph.find_edge(src, dst).is_none() {
            self.graph.add_edge(src, dst, ());
        }
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.index.contains_key(node)
    }

    /// Direct predecessors, sorted. Empty for unknown nodes.
    pub fn predecessors(&self, node: &Node) -> Vec<&Node> {
        self.neighbors(node, Direction::Incoming)
    }

    /// Direct successors, sorted. Empty for unknown nodes.
    pub fn successors(&self, node: &Node) -> Vec<&Node> {
        self.neighbors(node, Direction::Outgoing)
    }

    fn neighbors(&self, node: &Node, dir: Direction) -> Vec<&Node> {
        let Some(&idx) = self.index.get(node) else {
            return Vec::new();
        };
        let mut out: Vec<&Node> = self
            .graph
            .neighbors_directed(idx, dir)
            .filter_map(|n| self.graph.node_weight(n))
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// All nodes, sorted
    pub fn nodes(&self) -> Vec<&Node> {
        let mut nodes: Vec<&Node> = self.graph.node_weights().collect();
        nodes.sort();
        nodes
    }

    /// All edges as `(from, to)`, sorted
    pub fn edges(&self) -> Vec<(&Node, &Node)> {
        let mut edges: Vec<(&Node, &Node)> = self
            .graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .filter_map(|(s, d)| Some((self.graph.node_weight(s)?, self.graph.node_weight(d)?)))
            .collect();
        edges.sort();
        edges
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Restriction to `keep`: nodes of `keep` present in this graph plus
    /// the edges with both endpoints inside it.
    pub fn project(&self, keep: &BTreeSet<Node>) -> DefUseGraph {
        let mut sub = DefUseGraph::new();
        for node in keep.iter().filter(|n| self.contains(n)) {
            sub.add_node(node.clone());
        }
        for (from, to) in self.edges() {
            if keep.contains(from) && keep.contains(to) {
                sub.add_edge(from.clone(), to.clone());
            }
        }
        sub
    }
}

impl fmt::Display for DefUseGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (from, to) in self.edges() {
            writeln!(f, "{} -> {}", from, to)?;
        }
        Ok(())
    }
}
