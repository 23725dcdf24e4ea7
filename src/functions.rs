//! Named template functions and the layering rules between them
//!
//! Functions come from three places: globals passed to the registry, the
//! functions attached to each fragment, and extras supplied for a single render
//! call. Each layer is an explicit [`FunctionMap`]; combining two layers with
//! [`FunctionMap::layered`] produces a new map in which the upper layer wins.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use tera::{Function, Tera, Value};

/// A callable shared by every engine instance it gets registered on
#[derive(Clone)]
struct SharedFunction(Arc<dyn Function>);

impl Function for SharedFunction {
    fn call(&self, args: &HashMap<String, Value>) -> tera::Result<Value> {
        self.0.call(args)
    }

    fn is_safe(&self) -> bool {
        self.0.is_safe()
    }
}

/// An ordered set of named template functions
#[derive(Clone, Default)]
pub struct FunctionMap {
    entries: BTreeMap<String, SharedFunction>,
}

impl FunctionMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a function, replacing any existing entry with the same name
    pub fn with<F>(mut self, name: impl Into<String>, function: F) -> Self
    where
        F: Function + 'static,
    {
        self.insert(name, function);
        self
    }

    /// Insert a function. Returns `true` if an entry with that name was replaced.
    pub fn insert<F>(&mut self, name: impl Into<String>, function: F) -> bool
    where
        F: Function + 'static,
    {
        self.entries
            .insert(name.into(), SharedFunction(Arc::new(function)))
            .is_some()
    }

    /// Check if a function is defined
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Function names in lexical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Combine this map with `overrides` on top of it
    ///
    /// Entries from `overrides` take precedence on name collision. Neither
    /// input is modified.
    pub fn layered(&self, overrides: &FunctionMap) -> FunctionMap {
        let mut entries = self.entries.clone();
        entries.extend(
            overrides
                .entries
                .iter()
                .map(|(name, function)| (name.clone(), function.clone())),
        );
        FunctionMap { entries }
    }

    /// Invoke a function by name, returning `None` if it is not defined
    pub fn call(
        &self,
        name: &str,
        args: &HashMap<String, Value>,
    ) -> Option<tera::Result<Value>> {
        self.entries.get(name).map(|function| function.call(args))
    }

    /// Register every function on an engine instance
    pub(crate) fn register_on(&self, tera: &mut Tera) {
        for (name, function) in &self.entries {
            tera.register_function(name, function.clone());
        }
    }
}

impl fmt::Debug for FunctionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
