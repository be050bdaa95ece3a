//! Comparison operators: `> < =`.
//!
//! `>` and `<` are strictly binary; `=` is variadic over at least two
//! operands and is true iff every operand is equal to every other. All
//! three operate on integers only — there is no polymorphic equality.

use crate::error::InterpreterError;
use crate::value::Value;

fn as_int(op: &str, v: &Value) -> Result<i64, InterpreterError> {
    match v {
        Value::Int(n) => Ok(*n),
        other => Err(InterpreterError::type_mismatch(op, "number", other.type_name())),
    }
}

pub fn gt(args: &[Value]) -> Result<Value, InterpreterError> {
    if args.len() != 2 {
        return Err(InterpreterError::arity(">", "2", args.len()));
    }
    Ok(Value::Bool(as_int(">", &args[0])? > as_int(">", &args[1])?))
}

pub fn lt(args: &[Value]) -> Result<Value, InterpreterError> {
    if args.len() != 2 {
        return Err(InterpreterError::arity("<", "2", args.len()));
    }
    Ok(Value::Bool(as_int("<", &args[0])? < as_int("<", &args[1])?))
}

pub fn eq(args: &[Value]) -> Result<Value, InterpreterError> {
    if args.len() < 2 {
        return Err(InterpreterError::arity("=", "at least 2", args.len()));
    }
    let first = as_int("=", &args[0])?;
    let mut all_equal = true;
    for arg in &args[1..] {
        if as_int("=", arg)? != first {
            all_equal = false;
        }
    }
    Ok(Value::Bool(all_equal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gt_and_lt_are_strictly_binary() {
        assert!(matches!(gt(&[Value::Int(3), Value::Int(2)]), Ok(Value::Bool(true))));
        assert!(gt(&[Value::Int(3), Value::Int(2), Value::Int(1)]).is_err());
    }

    #[test]
    fn eq_is_true_only_when_all_operands_match() {
        assert!(matches!(
            eq(&[Value::Int(5), Value::Int(5), Value::Int(5)]),
            Ok(Value::Bool(true))
        ));
        assert!(matches!(
            eq(&[Value::Int(5), Value::Int(5), Value::Int(6)]),
            Ok(Value::Bool(false))
        ));
    }

    #[test]
    fn eq_requires_at_least_two_operands() {
        assert!(eq(&[Value::Int(1)]).is_err());
    }

    #[test]
    fn rejects_boolean_operands() {
        assert!(matches!(
            gt(&[Value::Bool(true), Value::Int(1)]),
            Err(InterpreterError::Type(_))
        ));
    }
}
