//! Logical operators: `and or not`.
//!
//! `and`/`or` are variadic over at least two boolean operands. Every
//! operand is already evaluated by the time it reaches here — the
//! evaluator does not short-circuit argument evaluation for these, so
//! the only thing left to do is check kinds and fold.

use crate::error::InterpreterError;
use crate::value::Value;

fn as_bool(op: &str, v: &Value) -> Result<bool, InterpreterError> {
    match v {
        Value::Bool(b) => Ok(*b),
        other => Err(InterpreterError::type_mismatch(op, "boolean", other.type_name())),
    }
}

pub fn and(args: &[Value]) -> Result<Value, InterpreterError> {
    if args.len() < 2 {
        return Err(InterpreterError::arity("and", "at least 2", args.len()));
    }
    let mut result = true;
    for arg in args {
        result &= as_bool("and", arg)?;
    }
    Ok(Value::Bool(result))
}

pub fn or(args: &[Value]) -> Result<Value, InterpreterError> {
    if args.len() < 2 {
        return Err(InterpreterError::arity("or", "at least 2", args.len()));
    }
    let mut result = false;
    for arg in args {
        result |= as_bool("or", arg)?;
    }
    Ok(Value::Bool(result))
}

pub fn not(args: &[Value]) -> Result<Value, InterpreterError> {
    if args.len() != 1 {
        return Err(InterpreterError::arity("not", "1", args.len()));
    }
    Ok(Value::Bool(!as_bool("not", &args[0])?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_requires_all_true() {
        assert!(matches!(
            and(&[Value::Bool(true), Value::Bool(true)]),
            Ok(Value::Bool(true))
        ));
        assert!(matches!(
            and(&[Value::Bool(true), Value::Bool(false)]),
            Ok(Value::Bool(false))
        ));
    }

    #[test]
    fn or_requires_at_least_one_true() {
        assert!(matches!(
            or(&[Value::Bool(false), Value::Bool(false), Value::Bool(true)]),
            Ok(Value::Bool(true))
        ));
    }

    #[test]
    fn not_is_unary() {
        assert!(matches!(not(&[Value::Bool(true)]), Ok(Value::Bool(false))));
        assert!(not(&[Value::Bool(true), Value::Bool(false)]).is_err());
    }

    #[test]
    fn rejects_integer_operands() {
        assert!(matches!(
            and(&[Value::Bool(true), Value::Int(1)]),
            Err(InterpreterError::Type(_))
        ));
    }
}
