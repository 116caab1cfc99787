use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexical scope: a mapping from names to values with an optional link to
/// the enclosing scope.
///
/// Lookup walks outward through the chain; definition writes only to the
/// current scope, so an inner `let` shadows without touching the outer
/// binding. Environments are shared through `Rc` because closures keep
/// their defining scope alive. A binding of a closure inside the very
/// environment it captured forms a reference cycle; such cycles are
/// deliberately left to leak.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    outer:    Option<Rc<Environment>>,
}

impl Environment {
    /// Creates a top-level scope.
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Creates a scope enclosed by `outer`.
    ///
    /// This is what every function call does with the function's captured
    /// environment.
    #[must_use]
    pub fn new_enclosed(outer: Rc<Self>) -> Rc<Self> {
        Rc::new(Self { bindings: RefCell::new(HashMap::new()),
                       outer:    Some(outer), })
    }

    /// Resolves `name`, walking outward through enclosing scopes.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.bindings.borrow().get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.get(name)),
        }
    }

    /// Binds `name` in this scope, replacing any previous binding here.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }
}
