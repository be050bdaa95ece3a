// ABOUTME: Abstract syntax tree node types produced by the parser
// Fun nodes are shared behind an Rc so a closure can hold a reference into the tree without cloning the body

use std::rc::Rc;

/// The named built-in operations. Dispatch on these is a pattern match
/// in the evaluator, not a string/dictionary lookup, so `define`,
/// `if`, `fun` and these operator names can never be shadowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Gt,
    Lt,
    Eq,
    And,
    Or,
    Not,
    PrintNum,
    PrintBool,
}

impl BuiltinOp {
    /// `print-num`/`print-bool` are only valid as a `print_stmt`, never
    /// nested inside a general expression — the grammar does not list
    /// them under `exp`.
    pub fn is_expr_op(self) -> bool {
        !matches!(self, BuiltinOp::PrintNum | BuiltinOp::PrintBool)
    }

    /// The reserved name this operator is written as in source.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinOp::Add => "+",
            BuiltinOp::Sub => "-",
            BuiltinOp::Mul => "*",
            BuiltinOp::Div => "/",
            BuiltinOp::Mod => "mod",
            BuiltinOp::Gt => ">",
            BuiltinOp::Lt => "<",
            BuiltinOp::Eq => "=",
            BuiltinOp::And => "and",
            BuiltinOp::Or => "or",
            BuiltinOp::Not => "not",
            BuiltinOp::PrintNum => "print-num",
            BuiltinOp::PrintBool => "print-bool",
        }
    }

    /// Look up a built-in by its reserved name.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "+" => BuiltinOp::Add,
            "-" => BuiltinOp::Sub,
            "*" => BuiltinOp::Mul,
            "/" => BuiltinOp::Div,
            "mod" => BuiltinOp::Mod,
            ">" => BuiltinOp::Gt,
            "<" => BuiltinOp::Lt,
            "=" => BuiltinOp::Eq,
            "and" => BuiltinOp::And,
            "or" => BuiltinOp::Or,
            "not" => BuiltinOp::Not,
            "print-num" => BuiltinOp::PrintNum,
            "print-bool" => BuiltinOp::PrintBool,
            _ => return None,
        })
    }
}

/// Every name the grammar reserves: a `VAR` may not be any of these.
pub const RESERVED_WORDS: &[&str] = &["define", "if", "fun"];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name) || BuiltinOp::from_name(name).is_some()
}

/// A function literal: an ordered parameter list plus a body. Held
/// behind `Rc` so every closure created from the same `fun` expression
/// shares one copy of the body AST.
#[derive(Debug, PartialEq)]
pub struct FunNode {
    pub params: Vec<String>,
    pub body: FunBody,
}

/// `def_stmt* exp` — zero or more local bindings followed by exactly
/// one result expression.
#[derive(Debug, PartialEq)]
pub struct FunBody {
    pub defines: Vec<(String, Expr)>,
    pub result: Box<Expr>,
}

#[derive(Debug, PartialEq)]
pub enum Expr {
    IntLiteral(i64),
    BoolLiteral(bool),
    Symbol(String),
    If(Box<Expr>, Box<Expr>, Box<Expr>),
    Fun(Rc<FunNode>),
    Call(Box<Expr>, Vec<Expr>),
    Builtin(BuiltinOp, Vec<Expr>),
}

/// A top-level statement: a binding, a print, or an expression whose
/// value joins the program's result sequence.
///
/// `print_stmt` is its own grammar production (`'(' 'print-num' exp ')'`)
/// rather than part of `exp`, so it is kept as a distinct `Stmt` variant
/// instead of an `Expr::Builtin` — it can appear at the top level but
/// never nested inside an arithmetic expression, an `if` branch, or a
/// function body.
#[derive(Debug, PartialEq)]
pub enum Stmt {
    Define(String, Expr),
    Print(BuiltinOp, Expr),
    Expr(Expr),
}

#[derive(Debug, PartialEq)]
pub struct Program(pub Vec<Stmt>);
