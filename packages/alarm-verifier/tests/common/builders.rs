//! Test data builders

use alarm_verifier::features::dug::DefUseGraph;
use alarm_verifier::shared::models::{
    Alarm, AlarmExp, AllocKind, Command, Exp, Location, Lval, Node, Program, VarInfo,
};

/// Node in `main`
pub fn n(index: usize) -> Node {
    Node::new("main", index)
}

/// Local variable expression
pub fn var(name: &str) -> Exp {
    Exp::var(VarInfo::local(name))
}

pub fn int(value: i64) -> Exp {
    Exp::int(value)
}

/// Unresolved `arr[idx]` alarm
pub fn array_alarm(node: Node, arr: &str, idx: Exp) -> Alarm {
    Alarm::unproven(
        node,
        AlarmExp::ArrayExp {
            lval: Lval::var(VarInfo::local(arr)),
            index: idx,
            loc: Location::new("test.c", 1),
        },
    )
}

/// Builder for Program, one procedure at a time
#[derive(Debug)]
pub struct ProgramBuilder {
    program: Program,
    proc: String,
}

impl Default for ProgramBuilder {
    fn default() -> Self {
        Self {
            program: Program::new(),
            proc: "main".to_string(),
        }
    }
}

impl ProgramBuilder {
    /// Create a new builder positioned in `main`
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the procedure subsequent commands belong to
    pub fn in_proc(mut self, pid: &str) -> Self {
        self.proc = pid.to_string();
        self
    }

    fn node(&self, index: usize) -> Node {
        Node::new(self.proc.as_str(), index)
    }

    pub fn command(mut self, index: usize, cmd: Command) -> Self {
        let node = self.node(index);
        self.program.add_command(node, cmd);
        self
    }

    /// `x = e`
    pub fn assign(self, index: usize, x: &str, e: Exp) -> Self {
        self.command(
            index,
            Command::Set {
                lval: Lval::var(VarInfo::local(x)),
                exp: e,
            },
        )
    }

    /// `x = arr[idx]`
    pub fn read_index(self, index: usize, x: &str, arr: &str, idx: Exp) -> Self {
        self.assign(index, x, Exp::Lval(Lval::index(VarInfo::local(arr), idx)))
    }

    /// `arr = alloc([size])`
    pub fn alloc(self, index: usize, arr: &str, size: Exp) -> Self {
        self.command(
            index,
            Command::Alloc {
                lval: Lval::var(VarInfo::local(arr)),
                kind: AllocKind::Array(size),
            },
        )
    }

    pub fn assume(self, index: usize, cond: Exp) -> Self {
        self.command(index, Command::Assume(cond))
    }

    /// `x = phi(y, z)`
    pub fn phi(self, index: usize, x: &str, y: &str, z: &str) -> Self {
        self.command(
            index,
            Command::Call {
                ret: Some(Lval::var(VarInfo::local(x))),
                callee: Exp::var(VarInfo::global("phi")),
                args: vec![var(y), var(z)],
            },
        )
    }

    /// `x = <external>`
    pub fn external(self, index: usize, x: &str) -> Self {
        self.command(
            index,
            Command::External {
                lval: Lval::var(VarInfo::local(x)),
            },
        )
    }

    /// CFG path through the given positions of the current procedure
    pub fn path(mut self, indices: &[usize]) -> Self {
        let nodes: Vec<Node> = indices.iter().map(|&i| self.node(i)).collect();
        self.program.add_cfg_path(&nodes);
        self
    }

    /// Inter-procedural CFG edge
    pub fn cfg_edge(mut self, from: Node, to: Node) -> Self {
        self.program.add_cfg_edge(from, to);
        self
    }

    pub fn build(self) -> Program {
        self.program
    }
}

/// Def-use graph from an edge list
pub fn graph(edges: &[(Node, Node)]) -> DefUseGraph {
    let mut g = DefUseGraph::new();
    for (from, to) in edges {
        g.add_edge(from.clone(), to.clone());
    }
    g
}
