//! Dataflow table domain

use crate::features::facts::FactSet;
use crate::shared::models::Node;
use std::collections::BTreeMap;

static NO_FACTS: FactSet = FactSet::new();

/// Node → facts reaching it, for one alarm's sliced graph.
///
/// Owned by a single verification attempt; never shared between alarms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataflowTable {
    entries: BTreeMap<Node, FactSet>,
}

impl DataflowTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, node: &Node) -> Option<&FactSet> {
        self.entries.get(node)
    }

    /// Facts stored at `node`; empty for nodes outside the table
    pub fn facts_at(&self, node: &Node) -> &FactSet {
        self.entries.get(node).unwrap_or(&NO_FACTS)
    }

    pub fn entry(&mut self, node: Node) -> &mut FactSet {
        self.entries.entry(node).or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total facts over all nodes
    pub fn fact_count(&self) -> usize {
        self.entries.values().map(|s| s.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Node, &FactSet)> {
        self.entries.iter()
    }
}

/// Outcome of one fixpoint computation
#[derive(Debug, Clone)]
pub struct FixpointResult {
    pub table: DataflowTable,

    /// Worklist pops performed
    pub iterations: usize,

    /// False when the iteration cap stopped the solver early
    pub converged: bool,
}
