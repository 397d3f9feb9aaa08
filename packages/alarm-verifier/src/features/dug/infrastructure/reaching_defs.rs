/*
 * Reaching-Definitions Def-Use Graph Builder
 *
 * Links every definition of a variable to the nodes that read it while
 * that definition is still live.
 *
 * Algorithm (forward, may):
 *   out[n] = gen[n] ∪ (in[n] − kill[n])
 *   in[n]  = ⋃ out[p] for p in cfg_predecessors(n)
 *   edge d → u  for every (v, d) ∈ in[u] with v ∈ uses(u)
 *
 * Definitions are tracked by variable name. Writing a whole variable
 * kills its earlier definitions; writing one array cell (`a[i] = v`) is a
 * weak update that adds a definition without killing, and so is an
 * `assume`, which refines the variables it tests. Writes through
 * pointers define nothing.
 */

use crate::features::dug::domain::DefUseGraph;
use crate::features::dug::ports::DefUseGraphBuilder;
use crate::shared::models::{Node, ProgramPort};
use rustc_hash::FxHashSet;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use tracing::debug;

/// (variable, defining node)
type Definition = (String, Node);

/// Builds the base def-use graph from CFG reaching definitions
#[derive(Debug, Clone, Copy, Default)]
pub struct ReachingDefBuilder;

impl ReachingDefBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Definitions live on exit of each node
    fn reaching_out(&self, program: &dyn ProgramPort) -> BTreeMap<Node, BTreeSet<Definition>> {
        let mut out: BTreeMap<Node, BTreeSet<Definition>> = BTreeMap::new();
        let mut worklist: VecDeque<Node> = program.nodes().into_iter().cloned().collect();
        let mut queued: FxHashSet<Node> = worklist.iter().cloned().collect();

        while let Some(node) = worklist.pop_front() {
            queued.remove(&node);

            let incoming = reaching_in(program, &out, &node);
            let cmd = program.command_at(&node);
            let defs = cmd.map(|c| c.defs()).unwrap_or_default();
            let strong = cmd
                .and_then(|c| c.target())
                .is_some_and(|lv| lv.as_bare_var().is_some());

            let mut new_out: BTreeSet<Definition> = incoming
                .into_iter()
                .filter(|(var, _)| !(strong && defs.contains(var)))
                .collect();
            new_out.extend(defs.into_iter().map(|var| (var, node.clone())));

            if out.get(&node) != Some(&new_out) {
                out.insert(node.clone(), new_out);
                for succ in program.cfg_successors(&node) {
                    if queued.insert(succ.clone()) {
                        worklist.push_back(succ.clone());
                    }
                }
            }
        }

        out
    }
}

fn reaching_in(
    program: &dyn ProgramPort,
    out: &BTreeMap<Node, BTreeSet<Definition>>,
    node: &Node,
) -> BTreeSet<Definition> {
    program
        .cfg_predecessors(node)
        .into_iter()
        .filter_map(|p| out.get(p))
        .flatten()
        .cloned()
        .collect()
}

impl DefUseGraphBuilder for ReachingDefBuilder {
    fn build(&self, program: &dyn ProgramPort) -> DefUseGraph {
        let out = self.reaching_out(program);
        let mut graph = DefUseGraph::new();

        for node in program.nodes() {
            graph.add_node(node.clone());
            let Some(cmd) = program.command_at(node) else {
                continue;
            };
            let uses = cmd.uses();
            if uses.is_empty() {
                continue;
            }
            for (var, def) in reaching_in(program, &out, node) {
                if uses.contains(&var) {
                    graph.add_edge(def, node.clone());
                }
            }
        }

        debug!(
            "def-use graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }
}
