//! TOML manifests describing composites and registry settings
//!
//! ```toml
//! [settings]
//! autoescape = true
//!
//! [[composites.page]]
//! name = "page"
//! path = "page.html"
//!
//! [[composites.page]]
//! name = "header"
//! path = "partials/header.html"
//! ```
//!
//! Functions cannot be expressed in a manifest; attach them to the resulting
//! [`CompositeSpec`] in code.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::config::RegistryConfig;
use crate::spec::{CompositeSpec, FragmentSpec};

/// Errors that can occur when loading or parsing manifests
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse manifest TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A composite specification together with the settings to build it with
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    pub spec: CompositeSpec,
    pub config: RegistryConfig,
}

/// TOML structure for deserializing manifests
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlManifest {
    settings: Option<TomlSettings>,
    #[serde(default)]
    composites: BTreeMap<String, Vec<TomlFragment>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSettings {
    autoescape: Option<bool>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlFragment {
    name: String,
    path: String,
}

impl Manifest {
    /// Load manifest from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load manifest from TOML string
    pub fn from_str(content: &str) -> Result<Self, ManifestError> {
        let parsed: TomlManifest = toml::from_str(content)?;

        let mut config = RegistryConfig::default();
        if let Some(autoescape) = parsed.settings.and_then(|s| s.autoescape) {
            config = config.with_autoescape(autoescape);
        }

        let spec = parsed
            .composites
            .into_iter()
            .map(|(name, fragments)| {
                let fragments: Vec<FragmentSpec> = fragments
                    .into_iter()
                    .map(|f| FragmentSpec::new(f.name, f.path))
                    .collect();
                (name, fragments)
            })
            .collect();

        Ok(Manifest { spec, config })
    }

    pub fn into_parts(self) -> (CompositeSpec, RegistryConfig) {
        (self.spec, self.config)
    }
}
