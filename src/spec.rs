//! Declarative description of composite templates and their fragments

use std::collections::btree_map::{self, BTreeMap};

use tera::Function;

use crate::functions::FunctionMap;

/// One file-backed piece of template source
#[derive(Debug, Clone)]
pub struct FragmentSpec {
    /// Name the fragment is registered under inside its composite
    pub name: String,
    /// Path of the fragment's source, relative to the file source
    pub path: String,
    /// Functions layered over the globals while this fragment is loaded
    pub functions: FunctionMap,
}

impl FragmentSpec {
    /// Create a fragment with no functions of its own
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            functions: FunctionMap::new(),
        }
    }

    /// Attach a single function
    pub fn with_function<F>(mut self, name: impl Into<String>, function: F) -> Self
    where
        F: Function + 'static,
    {
        self.functions.insert(name, function);
        self
    }

    /// Replace the fragment's function map
    pub fn with_functions(mut self, functions: FunctionMap) -> Self {
        self.functions = functions;
        self
    }
}

/// Mapping from composite name to its ordered fragment list
///
/// Every composite must contain a fragment with the composite's own name; that
/// fragment is the entry point rendered under the composite's name. The
/// invariant is checked when a registry is built, not on insertion.
///
/// Composites iterate in lexical order of their names.
#[derive(Debug, Clone, Default)]
pub struct CompositeSpec {
    composites: BTreeMap<String, Vec<FragmentSpec>>,
}

impl CompositeSpec {
    /// Create an empty specification
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a composite, replacing any previous definition with the same name
    pub fn with_composite(
        mut self,
        name: impl Into<String>,
        fragments: impl IntoIterator<Item = FragmentSpec>,
    ) -> Self {
        self.insert(name, fragments);
        self
    }

    /// Insert a composite, returning the fragments it replaced
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        fragments: impl IntoIterator<Item = FragmentSpec>,
    ) -> Option<Vec<FragmentSpec>> {
        self.composites
            .insert(name.into(), fragments.into_iter().collect())
    }

    /// Fragments of a composite, in declaration order
    pub fn get(&self, name: &str) -> Option<&[FragmentSpec]> {
        self.composites.get(name).map(|f| f.as_slice())
    }

    /// Composite names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.composites.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<FragmentSpec>> {
        self.composites.iter()
    }

    pub fn len(&self) -> usize {
        self.composites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composites.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<FragmentSpec>)> for CompositeSpec {
    fn from_iter<I: IntoIterator<Item = (N, Vec<FragmentSpec>)>>(iter: I) -> Self {
        Self {
            composites: iter
                .into_iter()
                .map(|(name, fragments)| (name.into(), fragments))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CompositeSpec {
    type Item = (&'a String, &'a Vec<FragmentSpec>);
    type IntoIter = btree_map::Iter<'a, String, Vec<FragmentSpec>>;

    fn into_iter(self) -> Self::IntoIter {
        self.composites.iter()
    }
}
