//! Alarms reported by the numeric analysis

use super::expression::{Exp, Lval};
use super::node::Node;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source location of the guarded expression
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Expression guarded by an alarm
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlarmExp {
    /// `lval[index]`
    ArrayExp { lval: Lval, index: Exp, loc: Location },

    /// `*exp`
    DerefExp { exp: Exp, loc: Location },

    /// `numerator / denominator`
    DivExp {
        numerator: Exp,
        denominator: Exp,
        loc: Location,
    },

    /// Buffer argument of a library call (`strcpy`, `memcpy`, ...)
    BufferOverrunLib {
        name: String,
        args: Vec<Exp>,
        loc: Location,
    },
}

impl AlarmExp {
    pub fn loc(&self) -> &Location {
        match self {
            AlarmExp::ArrayExp { loc, .. }
            | AlarmExp::DerefExp { loc, .. }
            | AlarmExp::DivExp { loc, .. }
            | AlarmExp::BufferOverrunLib { loc, .. } => loc,
        }
    }
}

impl fmt::Display for AlarmExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlarmExp::ArrayExp { lval, index, .. } => write!(f, "{}[{}]", lval, index),
            AlarmExp::DerefExp { exp, .. } => write!(f, "*({})", exp),
            AlarmExp::DivExp {
                numerator,
                denominator,
                ..
            } => write!(f, "{} / {}", numerator, denominator),
            AlarmExp::BufferOverrunLib { name, args, .. } => {
                let rendered: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                write!(f, "{}({})", name, rendered.join(", "))
            }
        }
    }
}

/// Resolution status assigned by the numeric analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlarmStatus {
    /// Safe according to the numeric analysis
    Proven,
    /// Potential violation, not resolved
    Unproven,
    /// Unreachable in the abstract state
    BotAlarm,
}

impl fmt::Display for AlarmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AlarmStatus::Proven => "proven",
            AlarmStatus::Unproven => "UNPROVEN",
            AlarmStatus::BotAlarm => "bot",
        };
        f.write_str(s)
    }
}

/// One query of the numeric analysis
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alarm {
    pub node: Node,
    pub exp: AlarmExp,
    pub status: AlarmStatus,
    /// Free-form note from the numeric analysis (e.g. offset/size intervals)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub desc: String,
}

impl Alarm {
    pub fn new(node: Node, exp: AlarmExp, status: AlarmStatus) -> Self {
        Self {
            node,
            exp,
            status,
            desc: String::new(),
        }
    }

    /// Unresolved alarm at `node`
    pub fn unproven(node: Node, exp: AlarmExp) -> Self {
        Self::new(node, exp, AlarmStatus::Unproven)
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    pub fn is_unresolved(&self) -> bool {
        self.status == AlarmStatus::Unproven
    }
}

impl fmt::Display for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @{}:  {} {}", self.exp, self.node, self.exp.loc(), self.status)?;
        if !self.desc.is_empty() {
            write!(f, " ({})", self.desc)?;
        }
        Ok(())
    }
}

/// Alarms the numeric analysis could not resolve
pub fn filter_unresolved(alarms: &[Alarm]) -> Vec<&Alarm> {
    alarms.iter().filter(|a| a.is_unresolved()).collect()
}
