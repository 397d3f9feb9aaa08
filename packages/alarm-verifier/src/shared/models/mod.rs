//! Program representation models
//!
//! - `node`       : program points (procedure + position)
//! - `expression` : C-like expressions and lvalues
//! - `command`    : per-node commands
//! - `program`    : node → command map with CFG edges
//! - `alarm`      : numeric-analysis alarms
//! - `memory`     : per-node abstract memory tables

pub mod alarm;
pub mod command;
pub mod expression;
pub mod memory;
pub mod node;
pub mod program;

pub use alarm::{filter_unresolved, Alarm, AlarmExp, AlarmStatus, Location};
pub use command::{AllocKind, Command};
pub use expression::{BinOp, Constant, Exp, LHost, Lval, Offset, Typ, UnOp, VarInfo};
pub use memory::MemoryTable;
pub use node::Node;
pub use program::{Program, ProgramPort};
