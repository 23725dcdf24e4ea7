//! Configuration for building a template registry

use tera::Tera;

/// Engine options applied to every composite in a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// HTML auto-escaping for every fragment, regardless of file extension
    pub autoescape: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self { autoescape: true }
    }
}

impl RegistryConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable HTML auto-escaping
    pub fn with_autoescape(mut self, autoescape: bool) -> Self {
        self.autoescape = autoescape;
        self
    }

    pub(crate) fn apply(&self, tera: &mut Tera) {
        // An empty suffix matches every template name
        if self.autoescape {
            tera.autoescape_on(vec![""]);
        } else {
            tera.autoescape_on(vec![]);
        }
    }
}
