//! Per-node abstract memory tables from the numeric analysis
//!
//! The verifier only borrows these. `M` is whatever abstract memory the
//! numeric engine produces; nothing here inspects it.

use super::node::Node;
use rustc_hash::FxHashMap;

/// Node → abstract memory
#[derive(Debug, Clone)]
pub struct MemoryTable<M> {
    entries: FxHashMap<Node, M>,
}

impl<M> Default for MemoryTable<M> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<M> MemoryTable<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: Node, mem: M) {
        self.entries.insert(node, mem);
    }

    pub fn get(&self, node: &Node) -> Option<&M> {
        self.entries.get(node)
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.entries.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<M> FromIterator<(Node, M)> for MemoryTable<M> {
    fn from_iter<I: IntoIterator<Item = (Node, M)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
