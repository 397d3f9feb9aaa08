//! Fact set domain

use crate::features::term::Formula;
use std::collections::BTreeSet;

/// Deduplicated facts attached to one node.
///
/// Ordered so that tables, VCs and log lines are reproducible.
pub type FactSet = BTreeSet<Formula>;

/// No fact appears together with its syntactic negation
pub fn is_contradiction_free(facts: &FactSet) -> bool {
    facts.iter().all(|f| !facts.contains(&f.negation()))
}
