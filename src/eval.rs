// ABOUTME: Evaluator module for executing parsed Mini-LISP expressions
// Walks a Program and returns the sequence of values its top-level expressions evaluate to

use crate::ast::{Expr, FunBody, Program, Stmt};
use crate::builtins;
use crate::env::Environment;
use crate::error::InterpreterError;
use crate::value::{Closure, Value};
use std::io::Write;
use std::rc::Rc;

/// Runs every statement in `program` against `env` in order, returning
/// the values of its non-`define`, non-`print` top-level expressions.
///
/// `define` never contributes to the result sequence — it only mutates
/// `env`. `print-num`/`print-bool` never contribute either — their only
/// effect is the line they write to `out`.
pub fn run(
    program: &Program,
    env: &Rc<Environment>,
    out: &mut dyn Write,
) -> Result<Vec<Value>, InterpreterError> {
    let mut results = Vec::new();
    for stmt in &program.0 {
        if let Some(value) = eval_stmt(stmt, env, out)? {
            results.push(value);
        }
    }
    Ok(results)
}

fn eval_stmt(
    stmt: &Stmt,
    env: &Rc<Environment>,
    out: &mut dyn Write,
) -> Result<Option<Value>, InterpreterError> {
    match stmt {
        Stmt::Define(name, expr) => {
            let value = eval_expr(expr, env)?;
            env.define(name.clone(), value);
            Ok(None)
        }
        Stmt::Print(op, expr) => {
            let value = eval_expr(expr, env)?;
            match op {
                crate::ast::BuiltinOp::PrintNum => builtins::print_num(&value, out)?,
                crate::ast::BuiltinOp::PrintBool => builtins::print_bool(&value, out)?,
                _ => unreachable!("parser only produces Stmt::Print with a print operator"),
            }
            Ok(None)
        }
        Stmt::Expr(expr) => Ok(Some(eval_expr(expr, env)?)),
    }
}

fn eval_expr(expr: &Expr, env: &Rc<Environment>) -> Result<Value, InterpreterError> {
    match expr {
        Expr::IntLiteral(n) => Ok(Value::Int(*n)),
        Expr::BoolLiteral(b) => Ok(Value::Bool(*b)),
        Expr::Symbol(name) => env.get(name).ok_or_else(|| InterpreterError::name(name.clone())),
        Expr::If(test, then_branch, else_branch) => {
            match eval_expr(test, env)? {
                Value::Bool(true) => eval_expr(then_branch, env),
                Value::Bool(false) => eval_expr(else_branch, env),
                other => Err(InterpreterError::type_mismatch("if", "boolean", other.type_name())),
            }
        }
        Expr::Fun(node) => Ok(Value::Function(Rc::new(Closure {
            node: node.clone(),
            env: env.clone(),
        }))),
        Expr::Call(callee, arg_exprs) => {
            let callee_value = eval_expr(callee, env)?;
            let closure = match callee_value {
                Value::Function(c) => c,
                other => {
                    return Err(InterpreterError::type_mismatch("call", "function", other.type_name()))
                }
            };
            let args = eval_args(arg_exprs, env)?;
            if args.len() != closure.node.params.len() {
                return Err(InterpreterError::arity(
                    "function call",
                    closure.node.params.len().to_string(),
                    args.len(),
                ));
            }
            tracing::trace!(params = ?closure.node.params, "creating call frame");
            let frame = Environment::with_bindings(&closure.node.params, args, closure.env.clone());
            tracing::debug!(arity = closure.node.params.len(), "entering function body");
            eval_fun_body(&closure.node.body, &frame)
        }
        Expr::Builtin(op, arg_exprs) => {
            let args = eval_args(arg_exprs, env)?;
            builtins::dispatch(*op, &args)
        }
    }
}

fn eval_args(arg_exprs: &[Expr], env: &Rc<Environment>) -> Result<Vec<Value>, InterpreterError> {
    arg_exprs.iter().map(|arg| eval_expr(arg, env)).collect()
}

/// Evaluates a function body's local defines against the freshly
/// created call frame, then its result expression in that same frame —
/// local `define`s never leak into the caller's environment.
fn eval_fun_body(body: &FunBody, frame: &Rc<Environment>) -> Result<Value, InterpreterError> {
    for (name, expr) in &body.defines {
        let value = eval_expr(expr, frame)?;
        frame.define(name.clone(), value);
    }
    eval_expr(&body.result, frame)
}
