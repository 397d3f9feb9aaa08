//! Program representation port
//!
//! The C front end is external. Features read programs through
//! [`ProgramPort`]; [`Program`] is the in-memory implementation used by
//! drivers that already hold commands and CFG edges.

use super::command::Command;
use super::node::Node;
use std::collections::{BTreeMap, BTreeSet};

/// Read-only access to commands and control flow
pub trait ProgramPort {
    /// Command at a program point
    fn command_at(&self, node: &Node) -> Option<&Command>;

    /// All program points, in node order
    fn nodes(&self) -> Vec<&Node>;

    /// Control-flow predecessors (intra- and inter-procedural)
    fn cfg_predecessors(&self, node: &Node) -> Vec<&Node>;

    /// Control-flow successors (intra- and inter-procedural)
    fn cfg_successors(&self, node: &Node) -> Vec<&Node>;
}

/// In-memory program: node → command plus CFG edges
#[derive(Debug, Clone, Default)]
pub struct Program {
    commands: BTreeMap<Node, Command>,
    succs: BTreeMap<Node, BTreeSet<Node>>,
    preds: BTreeMap<Node, BTreeSet<Node>>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the command at `node`
    pub fn add_command(&mut self, node: Node, cmd: Command) {
        self.commands.insert(node, cmd);
    }

    /// Add a control-flow edge; both ends default to `skip`
    pub fn add_cfg_edge(&mut self, from: Node, to: Node) {
        self.commands.entry(from.clone()).or_insert(Command::Skip);
        self.commands.entry(to.clone()).or_insert(Command::Skip);
        self.succs.entry(from.clone()).or_default().insert(to.clone());
        self.preds.entry(to).or_default().insert(from);
    }

    /// Add `nodes[0] → nodes[1] → ...`
    pub fn add_cfg_path(&mut self, nodes: &[Node]) {
        for pair in nodes.windows(2) {
            self.add_cfg_edge(pair[0].clone(), pair[1].clone());
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl ProgramPort for Program {
    fn command_at(&self, node: &Node) -> Option<&Command> {
        self.commands.get(node)
    }

    fn nodes(&self) -> Vec<&Node> {
        self.commands.keys().collect()
    }

    fn cfg_predecessors(&self, node: &Node) -> Vec<&Node> {
        self.preds
            .get(node)
            .map(|s| s.iter().collect())
            .unwrap_or_default()
    }

    fn cfg_successors(&self, node: &Node) -> Vec<&Node> {
        self.succs
            .get(node)
            .map(|s| s.iter().collect())
            .unwrap_or_default()
    }
}
