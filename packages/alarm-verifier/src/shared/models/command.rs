//! Per-node commands

use super::expression::{Exp, Lval};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Allocation shape
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllocKind {
    /// Array of `size` elements
    Array(Exp),
}

/// Command attached to a program point
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// `lval = exp`
    Set { lval: Lval, exp: Exp },

    /// `lval = alloc(kind)`
    Alloc { lval: Lval, kind: AllocKind },

    /// `ret = callee(args)`; SSA merges appear as calls to `phi`
    Call {
        ret: Option<Lval>,
        callee: Exp,
        args: Vec<Exp>,
    },

    /// Result of a call into code outside the program
    External { lval: Lval },

    /// `assume(cond)` on a branch edge
    Assume(Exp),

    Return(Option<Exp>),

    Skip,
}

impl Command {
    /// Name of the called function when the callee is a plain variable
    pub fn callee_name(&self) -> Option<&str> {
        match self {
            Command::Call { callee, .. } => callee.as_bare_var().map(|vi| vi.name.as_str()),
            _ => None,
        }
    }

    /// Lvalue written by this command
    pub fn target(&self) -> Option<&Lval> {
        match self {
            Command::Set { lval, .. }
            | Command::Alloc { lval, .. }
            | Command::External { lval } => Some(lval),
            Command::Call { ret, .. } => ret.as_ref(),
            Command::Assume(_) | Command::Return(_) | Command::Skip => None,
        }
    }

    /// Variables this command (re)defines.
    ///
    /// An `assume` refines every variable its condition reads.
    pub fn defs(&self) -> BTreeSet<String> {
        if let Command::Assume(cond) = self {
            return cond.variables();
        }
        self.target()
            .and_then(|lv| lv.defined_variable())
            .map(|name| BTreeSet::from([name.to_string()]))
            .unwrap_or_default()
    }

    /// Variables this command reads
    pub fn uses(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        match self {
            Command::Set { lval, exp } => {
                vars.extend(lval.read_variables());
                exp.collect_variables(&mut vars);
            }
            Command::Alloc { lval, kind } => {
                vars.extend(lval.read_variables());
                let AllocKind::Array(size) = kind;
                size.collect_variables(&mut vars);
            }
            Command::Call { ret, args, .. } => {
                if let Some(lv) = ret {
                    vars.extend(lv.read_variables());
                }
                for arg in args {
                    arg.collect_variables(&mut vars);
                }
            }
            Command::External { lval } => vars.extend(lval.read_variables()),
            Command::Assume(cond) => cond.collect_variables(&mut vars),
            Command::Return(Some(e)) => e.collect_variables(&mut vars),
            Command::Return(None) | Command::Skip => {}
        }
        vars
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Set { lval, exp } => write!(f, "{} := {}", lval, exp),
            Command::Alloc {
                lval,
                kind: AllocKind::Array(size),
            } => write!(f, "{} := alloc([{}])", lval, size),
            Command::Call { ret, callee, args } => {
                if let Some(lv) = ret {
                    write!(f, "{} := ", lv)?;
                }
                let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", callee, rendered.join(", "))
            }
            Command::External { lval } => write!(f, "{} := <external>", lval),
            Command::Assume(cond) => write!(f, "assume({})", cond),
            Command::Return(Some(e)) => write!(f, "return {}", e),
            Command::Return(None) => write!(f, "return"),
            Command::Skip => write!(f, "skip"),
        }
    }
}
