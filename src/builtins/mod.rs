//! The fixed, closed set of built-in operators. Unlike a typical Lisp,
//! these are not values bound in the global environment — they are
//! recognized by the parser as a distinct AST shape (`Expr::Builtin`)
//! and dispatched here by a pattern match, per the design note on
//! avoiding string-keyed dispatch of reserved names.

mod arithmetic;
mod comparison;
mod console;
mod logic;

use crate::ast::BuiltinOp;
use crate::error::InterpreterError;
use crate::value::Value;

/// Evaluate a non-print built-in over its already-evaluated arguments.
pub fn dispatch(op: BuiltinOp, args: &[Value]) -> Result<Value, InterpreterError> {
    match op {
        BuiltinOp::Add => arithmetic::add(args),
        BuiltinOp::Sub => arithmetic::sub(args),
        BuiltinOp::Mul => arithmetic::mul(args),
        BuiltinOp::Div => arithmetic::div(args),
        BuiltinOp::Mod => arithmetic::modulus(args),
        BuiltinOp::Gt => comparison::gt(args),
        BuiltinOp::Lt => comparison::lt(args),
        BuiltinOp::Eq => comparison::eq(args),
        BuiltinOp::And => logic::and(args),
        BuiltinOp::Or => logic::or(args),
        BuiltinOp::Not => logic::not(args),
        BuiltinOp::PrintNum | BuiltinOp::PrintBool => {
            unreachable!("print ops are parsed as Stmt::Print, never Expr::Builtin")
        }
    }
}

pub use console::{print_bool, print_num};
