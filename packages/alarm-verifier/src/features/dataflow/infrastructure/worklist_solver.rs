/*
 * Worklist Fixpoint Solver for Path Facts
 *
 * Kildall-style forward dataflow over a sliced def-use graph.
 *
 * Algorithm:
 * 1. stored[n] = ∅ for every node; worklist = all nodes in node order
 * 2. While worklist not empty:
 *    a. Pop node n (FIFO)
 *    b. Meet: input = ⋃ stored[p] for p in predecessors(n)
 *    c. Transfer: output = filter_contradictions(input, gen(n))
 *    d. If output ⊆ stored[n]: continue
 *       Else stored[n] ∪= output, enqueue successors not already queued
 * 3. Fixpoint reached when worklist empty
 *
 * Termination: stored sets only grow and every fact is drawn from the
 * finite union of gen(n) over the graph.
 *
 * Inputs only grow, so a fact once emitted at a node stays in its
 * input ∪ gen; the filter then keeps its negation out of every later
 * output and stored sets remain contradiction-free.
 */

use crate::features::dataflow::domain::{DataflowTable, FixpointResult};
use crate::features::dug::DefUseGraph;
use crate::features::facts::{filter_contradictions, generate_facts, FactSet};
use crate::shared::models::{Node, ProgramPort};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use tracing::{trace, warn};

/// Default cap on worklist pops
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Worklist-based fixpoint solver over fact sets
///
/// - Meet: union of predecessor facts
/// - Transfer: union with generated facts, then contradiction filter
/// - Iterate until no stored set grows
pub struct WorklistFactSolver<'a> {
    graph: &'a DefUseGraph,
    program: &'a dyn ProgramPort,

    /// Max iterations (safety limit)
    max_iterations: usize,
}

impl<'a> WorklistFactSolver<'a> {
    /// Create new solver
    pub fn new(graph: &'a DefUseGraph, program: &'a dyn ProgramPort) -> Self {
        Self {
            graph,
            program,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Create solver with custom iteration limit
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Facts each node generates on its own
    fn gen_facts(&self) -> FxHashMap<&'a Node, FactSet> {
        self.graph
            .nodes()
            .into_iter()
            .map(|node| {
                let facts = self
                    .program
                    .command_at(node)
                    .map(generate_facts)
                    .unwrap_or_default();
                (node, facts)
            })
            .collect()
    }

    /// Run to fixpoint (or to the iteration cap)
    pub fn solve(&self) -> FixpointResult {
        let gen = self.gen_facts();
        let mut table = DataflowTable::new();
        let mut worklist: VecDeque<&Node> = VecDeque::new();
        let mut queued: FxHashSet<&Node> = FxHashSet::default();

        for node in self.graph.nodes() {
            table.entry(node.clone());
            worklist.push_back(node);
            queued.insert(node);
        }

        let mut iterations = 0;
        let mut converged = true;

        while let Some(node) = worklist.pop_front() {
            if iterations >= self.max_iterations {
                warn!(
                    "fact solver stopped after {} iterations with {} nodes pending",
                    iterations,
                    worklist.len() + 1
                );
                converged = false;
                break;
            }
            iterations += 1;
            queued.remove(node);

            // Meet
            let mut input = FactSet::new();
            for pred in self.graph.predecessors(node) {
                input.extend(table.facts_at(pred).iter().cloned());
            }

            // Transfer
            let empty = FactSet::new();
            let output = filter_contradictions(&input, gen.get(node).unwrap_or(&empty));

            let stored = table.entry(node.clone());
            if output.is_subset(stored) {
                continue;
            }

            trace!(
                "node {} grew: {} facts → {} facts",
                node,
                stored.len(),
                stored.union(&output).count()
            );
            stored.extend(output);

            for succ in self.graph.successors(node) {
                if queued.insert(succ) {
                    worklist.push_back(succ);
                }
            }
        }

        trace!("fact solver finished after {} iterations", iterations);

        FixpointResult {
            table,
            iterations,
            converged,
        }
    }
}
