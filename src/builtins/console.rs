//! `print-num` and `print-bool`: the only observable side effect the
//! language has. Both write a single line to the interpreter's output
//! sink and produce no value — they cannot be nested inside another
//! expression, so the evaluator never needs a result for them.

use crate::error::InterpreterError;
use crate::value::Value;
use std::io::Write;

pub fn print_num(value: &Value, out: &mut dyn Write) -> Result<(), InterpreterError> {
    match value {
        Value::Int(n) => {
            writeln!(out, "{n}").map_err(|e| InterpreterError::runtime("print-num", e.to_string()))
        }
        other => Err(InterpreterError::type_mismatch(
            "print-num",
            "number",
            other.type_name(),
        )),
    }
}

pub fn print_bool(value: &Value, out: &mut dyn Write) -> Result<(), InterpreterError> {
    match value {
        Value::Bool(b) => writeln!(out, "{}", if *b { "#t" } else { "#f" })
            .map_err(|e| InterpreterError::runtime("print-bool", e.to_string())),
        other => Err(InterpreterError::type_mismatch(
            "print-bool",
            "boolean",
            other.type_name(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_num_writes_decimal_and_newline() {
        let mut out = Vec::new();
        print_num(&Value::Int(42), &mut out).unwrap();
        assert_eq!(out, b"42\n");
    }

    #[test]
    fn print_bool_writes_hash_t_or_f() {
        let mut out = Vec::new();
        print_bool(&Value::Bool(true), &mut out).unwrap();
        assert_eq!(out, b"#t\n");
    }

    #[test]
    fn print_num_rejects_boolean() {
        let mut out = Vec::new();
        assert!(print_num(&Value::Bool(true), &mut out).is_err());
    }

    #[test]
    fn print_bool_rejects_number() {
        let mut out = Vec::new();
        assert!(print_bool(&Value::Int(1), &mut out).is_err());
    }
}
