// ABOUTME: Environment module for managing variable bindings and scopes
// Frames are Rc-shared with strong parent pointers; recursive-define cycles are rooted in the global frame and never leak

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    /// An empty frame with no parent — used once, for the global environment.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            outer: None,
        })
    }

    /// An empty frame whose lookups fall back to `outer`.
    pub fn with_outer(outer: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            outer: Some(outer),
        })
    }

    /// A frame pre-populated by zipping `names` with `values` — the
    /// call frame created on function application. The caller must
    /// ensure the two slices have equal length (arity is checked by
    /// the evaluator before this is called).
    pub fn with_bindings(names: &[String], values: Vec<Value>, outer: Rc<Environment>) -> Rc<Self> {
        let bindings = names.iter().cloned().zip(values).collect();
        Rc::new(Environment {
            bindings: RefCell::new(bindings),
            outer: Some(outer),
        })
    }

    /// Insert or overwrite a binding in this frame only.
    pub fn define(&self, name: String, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Walk this frame and its ancestors looking for `name`.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref()?.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defines_and_looks_up_in_same_frame() {
        let env = Environment::new();
        env.define("x".to_string(), Value::Int(42));
        assert!(matches!(env.get("x"), Some(Value::Int(42))));
    }

    #[test]
    fn looks_up_missing_name_returns_none() {
        let env = Environment::new();
        assert!(env.get("missing").is_none());
    }

    #[test]
    fn redefining_in_same_frame_overwrites() {
        let env = Environment::new();
        env.define("x".to_string(), Value::Int(1));
        env.define("x".to_string(), Value::Int(2));
        assert!(matches!(env.get("x"), Some(Value::Int(2))));
    }

    #[test]
    fn child_frame_sees_parent_bindings() {
        let parent = Environment::new();
        parent.define("x".to_string(), Value::Int(1));
        let child = Environment::with_outer(parent);
        assert!(matches!(child.get("x"), Some(Value::Int(1))));
    }

    #[test]
    fn child_binding_shadows_parent_without_mutating_it() {
        let parent = Environment::new();
        parent.define("x".to_string(), Value::Int(1));
        let child = Environment::with_outer(parent.clone());
        child.define("x".to_string(), Value::Int(2));

        assert!(matches!(child.get("x"), Some(Value::Int(2))));
        assert!(matches!(parent.get("x"), Some(Value::Int(1))));
    }

    #[test]
    fn with_bindings_zips_names_and_values() {
        let outer = Environment::new();
        let frame = Environment::with_bindings(
            &["a".to_string(), "b".to_string()],
            vec![Value::Int(1), Value::Int(2)],
            outer,
        );
        assert!(matches!(frame.get("a"), Some(Value::Int(1))));
        assert!(matches!(frame.get("b"), Some(Value::Int(2))));
    }

    #[test]
    fn multi_level_lookup_walks_entire_chain() {
        let grandparent = Environment::new();
        grandparent.define("a".to_string(), Value::Int(1));
        let parent = Environment::with_outer(grandparent);
        parent.define("b".to_string(), Value::Int(2));
        let child = Environment::with_outer(parent);
        child.define("c".to_string(), Value::Int(3));

        assert!(matches!(child.get("a"), Some(Value::Int(1))));
        assert!(matches!(child.get("b"), Some(Value::Int(2))));
        assert!(matches!(child.get("c"), Some(Value::Int(3))));
    }
}
