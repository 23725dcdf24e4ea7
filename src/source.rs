//! Read-only providers of fragment source text

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

/// Something that can return file contents by path
pub trait FileSource {
    /// Read the file at `path`, failing if it is absent or unreadable
    fn read(&self, path: &str) -> io::Result<String>;
}

impl<T: FileSource + ?Sized> FileSource for &T {
    fn read(&self, path: &str) -> io::Result<String> {
        (**self).read(path)
    }
}

/// Files on disk, resolved against a root directory
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a relative path against the root
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

impl FileSource for DirSource {
    fn read(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.resolve(path))
    }
}

/// Files held in memory, keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add or replace a file
    pub fn insert(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl FileSource for MemorySource {
    fn read(&self, path: &str) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {}", path))
        })
    }
}
