//! Error types for building and rendering composite templates

use std::io;

use thiserror::Error;

/// Errors that can occur while building a registry
///
/// Any of these aborts construction; no partial registry is returned.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A fragment's source could not be read
    #[error("unable to read fragment '{fragment}' of template '{composite}' from '{path}'")]
    Read {
        composite: String,
        fragment: String,
        path: String,
        #[source]
        source: io::Error,
    },

    /// The fragments of a composite did not parse
    #[error("unable to parse fragments of template '{composite}'")]
    Parse {
        composite: String,
        #[source]
        source: tera::Error,
    },

    /// A composite never defines a fragment named after itself
    #[error("template '{composite}' has no fragment named '{composite}'")]
    InvalidSpec { composite: String },
}

impl BuildError {
    /// Name of the composite that failed to build
    pub fn composite(&self) -> &str {
        match self {
            BuildError::Read { composite, .. }
            | BuildError::Parse { composite, .. }
            | BuildError::InvalidSpec { composite } => composite,
        }
    }
}

/// Errors that can occur while rendering
#[derive(Debug, Error)]
pub enum RenderError {
    /// No composite with this name exists in the registry
    #[error("template not found in registry: {name}")]
    UnknownTemplate { name: String },

    /// The engine failed during execution; output may be partially written
    #[error("cannot render template '{name}'")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}
