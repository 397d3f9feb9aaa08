//! C-like expressions and lvalues
//!
//! Mirrors the shape a CIL-style front end hands over: an lvalue is a host
//! (variable or memory through an expression) plus an offset chain.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Source-level type, only as detailed as casts and `sizeof` need
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Typ {
    Void,
    Int,
    Char,
    Float,
    Ptr(Box<Typ>),
    Array(Box<Typ>, Option<i64>),
    Struct(String),
}

impl fmt::Display for Typ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typ::Void => write!(f, "void"),
            Typ::Int => write!(f, "int"),
            Typ::Char => write!(f, "char"),
            Typ::Float => write!(f, "float"),
            Typ::Ptr(t) => write!(f, "{} *", t),
            Typ::Array(t, Some(n)) => write!(f, "{}[{}]", t, n),
            Typ::Array(t, None) => write!(f, "{}[]", t),
            Typ::Struct(name) => write!(f, "struct {}", name),
        }
    }
}

/// Variable declaration info
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VarInfo {
    pub name: String,
    pub is_global: bool,
    pub typ: Typ,
}

impl VarInfo {
    /// Local `int` variable
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_global: false,
            typ: Typ::Int,
        }
    }

    /// Global `int` variable
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_global: true,
            typ: Typ::Int,
        }
    }

    /// Builder: set type
    pub fn with_typ(mut self, typ: Typ) -> Self {
        self.typ = typ;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Constant {
    Int(i64),
    Char(char),
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UnOp {
    /// Arithmetic negation `-e`
    Neg,
    /// Bitwise complement `~e`
    BNot,
    /// Logical not `!e`
    LNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BinOp {
    /// Arithmetic `+`
    PlusA,
    /// Pointer + integer
    PlusPI,
    /// Pointer + integer, from an array index expression
    IndexPI,
    /// Arithmetic `-`
    MinusA,
    /// Pointer - integer
    MinusPI,
    /// Pointer - pointer
    MinusPP,
    Mult,
    Div,
    Mod,
    Lt,
    Gt,
    Le,
    Ge,
    Eq,
    Ne,
    LAnd,
    LOr,
    BAnd,
    BOr,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::PlusA | BinOp::PlusPI | BinOp::IndexPI => "+",
            BinOp::MinusA | BinOp::MinusPI | BinOp::MinusPP => "-",
            BinOp::Mult => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::LAnd => "&&",
            BinOp::LOr => "||",
            BinOp::BAnd => "&",
            BinOp::BOr => "|",
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Exp {
    Const(Constant),
    Lval(Lval),
    SizeOf(Typ),
    SizeOfE(Box<Exp>),
    UnOp(UnOp, Box<Exp>),
    BinOp(BinOp, Box<Exp>, Box<Exp>),
    Cast(Typ, Box<Exp>),
    AddrOf(Lval),
    StartOf(Lval),
}

/// Lvalue: host plus offset chain
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Lval {
    pub host: LHost,
    pub offset: Offset,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LHost {
    Var(VarInfo),
    Mem(Box<Exp>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Offset {
    NoOffset,
    Field(String, Box<Offset>),
    Index(Box<Exp>, Box<Offset>),
}

// ═══════════════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════════════

impl Exp {
    pub fn int(value: i64) -> Self {
        Exp::Const(Constant::Int(value))
    }

    /// Read of a variable with no offset
    pub fn var(info: VarInfo) -> Self {
        Exp::Lval(Lval::var(info))
    }

    pub fn unop(op: UnOp, e: Exp) -> Self {
        Exp::UnOp(op, Box::new(e))
    }

    pub fn binop(op: BinOp, lhs: Exp, rhs: Exp) -> Self {
        Exp::BinOp(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn not(e: Exp) -> Self {
        Self::unop(UnOp::LNot, e)
    }

    pub fn lt(lhs: Exp, rhs: Exp) -> Self {
        Self::binop(BinOp::Lt, lhs, rhs)
    }

    pub fn plus(lhs: Exp, rhs: Exp) -> Self {
        Self::binop(BinOp::PlusA, lhs, rhs)
    }

    pub fn cast(typ: Typ, e: Exp) -> Self {
        Exp::Cast(typ, Box::new(e))
    }

    pub fn size_of_exp(e: Exp) -> Self {
        Exp::SizeOfE(Box::new(e))
    }

    /// The variable behind `Lval(Var x, NoOffset)`, if that is the shape
    pub fn as_bare_var(&self) -> Option<&VarInfo> {
        match self {
            Exp::Lval(lv) => lv.as_bare_var(),
            _ => None,
        }
    }

    /// Names of all variables read while evaluating this expression
    pub fn variables(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    pub(crate) fn collect_variables(&self, out: &mut BTreeSet<String>) {
        match self {
            Exp::Const(_) | Exp::SizeOf(_) => {}
            Exp::Lval(lv) => {
                lv.collect_read_variables(out);
                if let LHost::Var(vi) = &lv.host {
                    out.insert(vi.name.clone());
                }
            }
            Exp::SizeOfE(e) | Exp::UnOp(_, e) | Exp::Cast(_, e) => e.collect_variables(out),
            Exp::BinOp(_, lhs, rhs) => {
                lhs.collect_variables(out);
                rhs.collect_variables(out);
            }
            Exp::AddrOf(lv) | Exp::StartOf(lv) => lv.collect_read_variables(out),
        }
    }
}

impl Lval {
    pub fn var(info: VarInfo) -> Self {
        Self {
            host: LHost::Var(info),
            offset: Offset::NoOffset,
        }
    }

    /// `*e`
    pub fn mem(e: Exp) -> Self {
        Self {
            host: LHost::Mem(Box::new(e)),
            offset: Offset::NoOffset,
        }
    }

    /// `base->field`
    pub fn arrow(base: VarInfo, field: impl Into<String>) -> Self {
        Self {
            host: LHost::Mem(Box::new(Exp::var(base))),
            offset: Offset::Field(field.into(), Box::new(Offset::NoOffset)),
        }
    }

    /// `arr[index]`
    pub fn index(array: VarInfo, index: Exp) -> Self {
        Self {
            host: LHost::Var(array),
            offset: Offset::Index(Box::new(index), Box::new(Offset::NoOffset)),
        }
    }

    pub fn as_bare_var(&self) -> Option<&VarInfo> {
        match (&self.host, &self.offset) {
            (LHost::Var(vi), Offset::NoOffset) => Some(vi),
            _ => None,
        }
    }

    /// Variable whose storage this lvalue writes, when the host is a variable
    pub fn defined_variable(&self) -> Option<&str> {
        match &self.host {
            LHost::Var(vi) => Some(vi.name.as_str()),
            LHost::Mem(_) => None,
        }
    }

    /// Variables read to compute the address (memory host, index offsets)
    pub fn read_variables(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_read_variables(&mut vars);
        vars
    }

    fn collect_read_variables(&self, out: &mut BTreeSet<String>) {
        if let LHost::Mem(e) = &self.host {
            e.collect_variables(out);
        }
        self.offset.collect_variables(out);
    }
}

impl Offset {
    fn collect_variables(&self, out: &mut BTreeSet<String>) {
        match self {
            Offset::NoOffset => {}
            Offset::Field(_, rest) => rest.collect_variables(out),
            Offset::Index(e, rest) => {
                e.collect_variables(out);
                rest.collect_variables(out);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Rendering (C syntax)
// ═══════════════════════════════════════════════════════════════════════════

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Int(i) => write!(f, "{}", i),
            Constant::Char(c) => write!(f, "'{}'", c.escape_default()),
            Constant::Str(s) => write!(f, "\"{}\"", s.escape_default()),
        }
    }
}

impl fmt::Display for Exp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exp::Const(c) => write!(f, "{}", c),
            Exp::Lval(lv) => write!(f, "{}", lv),
            Exp::SizeOf(t) => write!(f, "sizeof({})", t),
            Exp::SizeOfE(e) => write!(f, "sizeof({})", e),
            Exp::UnOp(UnOp::Neg, e) => write!(f, "-({})", e),
            Exp::UnOp(UnOp::BNot, e) => write!(f, "~({})", e),
            Exp::UnOp(UnOp::LNot, e) => write!(f, "!({})", e),
            Exp::BinOp(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
            Exp::Cast(t, e) => write!(f, "({}){}", t, e),
            Exp::AddrOf(lv) => write!(f, "&{}", lv),
            Exp::StartOf(lv) => write!(f, "{}", lv),
        }
    }
}

impl fmt::Display for Lval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.host, &self.offset) {
            (LHost::Var(vi), offset) => write!(f, "{}{}", vi.name, offset),
            (LHost::Mem(e), Offset::Field(field, rest)) => write!(f, "{}->{}{}", e, field, rest),
            (LHost::Mem(e), offset) => write!(f, "(*{}){}", e, offset),
        }
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::NoOffset => Ok(()),
            Offset::Field(field, rest) => write!(f, ".{}{}", field, rest),
            Offset::Index(e, rest) => write!(f, "[{}]{}", e, rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_array_access() {
        let lv = Lval::index(VarInfo::local("a"), Exp::var(VarInfo::local("i")));
        assert_eq!(lv.to_string(), "a[i]");
    }

    #[test]
    fn test_render_arrow() {
        let lv = Lval::arrow(VarInfo::local("p").with_typ(Typ::Ptr(Box::new(Typ::Int))), "len");
        assert_eq!(lv.to_string(), "p->len");
    }

    #[test]
    fn test_variables_of_nested_expression() {
        let e = Exp::plus(
            Exp::Lval(Lval::index(VarInfo::local("a"), Exp::var(VarInfo::local("i")))),
            Exp::cast(Typ::Int, Exp::var(VarInfo::global("g"))),
        );
        let vars: Vec<_> = e.variables().into_iter().collect();
        assert_eq!(vars, vec!["a", "g", "i"]);
    }

    #[test]
    fn test_defined_variable() {
        assert_eq!(Lval::var(VarInfo::local("x")).defined_variable(), Some("x"));
        assert_eq!(Lval::arrow(VarInfo::local("p"), "f").defined_variable(), None);
    }
}
