//! Composite templates - named templates assembled from file fragments
//!
//! This library loads template fragments from a file source, groups them into
//! named composites according to a [`CompositeSpec`], validates the grouping,
//! and renders composites by name through the Tera engine.
//!
//! # Example
//!
//! ```rust
//! use composite_templates::{
//!     CompositeSpec, FragmentSpec, FunctionMap, MemorySource, TemplateRegistry,
//! };
//! use serde_json::json;
//!
//! let source = MemorySource::new()
//!     .with_file("page.tmpl", "Hello {{ Name }}")
//!     .with_file("header.tmpl", "<h1>{{ Name }}</h1>");
//!
//! let spec = CompositeSpec::new().with_composite(
//!     "page",
//!     [
//!         FragmentSpec::new("page", "page.tmpl"),
//!         FragmentSpec::new("header", "header.tmpl"),
//!     ],
//! );
//!
//! let registry = TemplateRegistry::build(source, &spec, &FunctionMap::new()).unwrap();
//! let out = registry
//!     .render_to_string("page", &json!({"Name": "World"}), None)
//!     .unwrap();
//! assert_eq!(out, "Hello World");
//! ```

pub mod config;
pub mod error;
pub mod functions;
pub mod manifest;
pub mod source;
pub mod spec;
pub mod template;

pub use config::RegistryConfig;
pub use error::{BuildError, RenderError};
pub use functions::FunctionMap;
pub use manifest::{Manifest, ManifestError};
pub use source::{DirSource, FileSource, MemorySource};
pub use spec::{CompositeSpec, FragmentSpec};
pub use template::{Renderer, TemplateRegistry};

// Function signatures are Tera's; re-exported so callers need not depend on it
pub use tera::{Function, Value};
