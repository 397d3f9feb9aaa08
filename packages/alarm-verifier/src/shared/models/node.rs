//! Program point identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// A program point: procedure name plus position inside it.
///
/// Ordered by procedure first, then position, so sorted node sets group
/// per procedure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Node {
    /// Owning procedure
    pub pid: String,

    /// Position within the procedure's CFG
    pub index: usize,
}

impl Node {
    /// Create new node
    pub fn new(pid: impl Into<String>, index: usize) -> Self {
        Self {
            pid: pid.into(),
            index,
        }
    }

    /// Procedure this node belongs to
    pub fn pid(&self) -> &str {
        &self.pid
    }

    /// Whether both nodes live in the same procedure
    pub fn same_procedure(&self, other: &Node) -> bool {
        self.pid == other.pid
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.pid, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_ordering_groups_procedures() {
        let mut nodes = vec![Node::new("main", 3), Node::new("foo", 7), Node::new("main", 1)];
        nodes.sort();
        assert_eq!(
            nodes,
            vec![Node::new("foo", 7), Node::new("main", 1), Node::new("main", 3)]
        );
    }

    #[test]
    fn test_node_display() {
        assert_eq!(Node::new("main", 4).to_string(), "main-4");
    }
}
