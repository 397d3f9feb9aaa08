//! Contradiction Filter
//!
//! Purely syntactic. Given the facts flowing into a node and the facts the
//! node generates:
//! 1. drop every fact whose syntactic negation is also present;
//! 2. drop the literal `false` shapes (`false`, `!true`).
//!
//! Logically equivalent but differently shaped negations (`i < n` vs
//! `n <= i`) are not detected.

use crate::features::facts::domain::FactSet;

/// `incoming ∪ generated`, minus contradictions
pub fn filter_contradictions(incoming: &FactSet, generated: &FactSet) -> FactSet {
    let union: FactSet = incoming.union(generated).cloned().collect();

    union
        .iter()
        .filter(|f| !union.contains(&f.negation()))
        .filter(|f| !f.is_self_contradictory())
        .cloned()
        .collect()
}
