//! Registry of compiled composite templates

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;
use tera::{Context, Template, Tera};
use tracing::{debug, info};

use crate::config::RegistryConfig;
use crate::error::{BuildError, RenderError};
use crate::functions::FunctionMap;
use crate::source::FileSource;
use crate::spec::{CompositeSpec, FragmentSpec};

use super::renderer::Renderer;

/// One composite compiled into its own engine instance
#[derive(Debug)]
struct Composite {
    tera: Tera,
    fragments: Vec<String>,
}

/// Immutable collection of compiled composites, rendered by name
///
/// Built once from a [`CompositeSpec`]; rendering never mutates the registry,
/// so a shared reference can be used from any number of threads.
#[derive(Debug)]
pub struct TemplateRegistry {
    composites: HashMap<String, Composite>,
}

impl TemplateRegistry {
    /// Build a registry with the default configuration
    pub fn build<S: FileSource>(
        source: S,
        spec: &CompositeSpec,
        globals: &FunctionMap,
    ) -> Result<Self, BuildError> {
        Self::build_with_config(source, spec, globals, &RegistryConfig::default())
    }

    /// Build a registry, reading every fragment from `source`
    ///
    /// Composites are processed in the order of `spec`, and the first failure
    /// aborts the whole build.
    pub fn build_with_config<S: FileSource>(
        source: S,
        spec: &CompositeSpec,
        globals: &FunctionMap,
        config: &RegistryConfig,
    ) -> Result<Self, BuildError> {
        let mut composites = HashMap::with_capacity(spec.len());

        for (name, fragments) in spec {
            let composite = assemble(&source, name, fragments, globals, config)?;
            composites.insert(name.clone(), composite);
        }

        info!(
            composites = composites.len(),
            autoescape = config.autoescape,
            "built template registry"
        );
        Ok(Self { composites })
    }

    /// Render the composite `name` into `writer`
    ///
    /// `extra` functions are visible to this call only. Output is streamed, so
    /// on a [`RenderError::Render`] the writer may already hold partial output.
    pub fn render<W, T>(
        &self,
        writer: W,
        name: &str,
        data: &T,
        extra: Option<&FunctionMap>,
    ) -> Result<(), RenderError>
    where
        W: Write,
        T: Serialize + ?Sized,
    {
        let composite = self
            .composites
            .get(name)
            .ok_or_else(|| RenderError::UnknownTemplate {
                name: name.to_string(),
            })?;

        let render_failed = |source| RenderError::Render {
            name: name.to_string(),
            source,
        };
        let context = Context::from_serialize(data).map_err(render_failed)?;

        let rendered = match extra.filter(|functions| !functions.is_empty()) {
            Some(functions) => {
                let mut tera = composite.tera.clone();
                functions.register_on(&mut tera);
                tera.render_to(name, &context, writer)
            }
            None => composite.tera.render_to(name, &context, writer),
        };
        rendered.map_err(render_failed)
    }

    /// Render into a buffer, returning output only if rendering succeeded
    pub fn render_to_string<T>(
        &self,
        name: &str,
        data: &T,
        extra: Option<&FunctionMap>,
    ) -> Result<String, RenderError>
    where
        T: Serialize + ?Sized,
    {
        let mut buf = Vec::new();
        self.render(&mut buf, name, data, extra)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Check if a composite exists
    pub fn contains(&self, name: &str) -> bool {
        self.composites.contains_key(name)
    }

    /// Get all composite names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.composites.keys().map(|s| s.as_str())
    }

    /// Fragment names of a composite, in declaration order
    pub fn fragments(&self, name: &str) -> Option<&[String]> {
        self.composites.get(name).map(|c| c.fragments.as_slice())
    }

    pub fn len(&self) -> usize {
        self.composites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composites.is_empty()
    }
}

impl Renderer for TemplateRegistry {
    fn render<W, T>(
        &self,
        writer: W,
        name: &str,
        data: &T,
        extra: Option<&FunctionMap>,
    ) -> Result<(), RenderError>
    where
        W: Write,
        T: Serialize + ?Sized,
    {
        TemplateRegistry::render(self, writer, name, data, extra)
    }
}

/// Read, parse and validate the fragments of one composite
fn assemble<S: FileSource>(
    source: &S,
    name: &str,
    fragments: &[FragmentSpec],
    globals: &FunctionMap,
    config: &RegistryConfig,
) -> Result<Composite, BuildError> {
    let mut has_entry_point = false;
    let mut functions = globals.clone();
    let mut texts = Vec::with_capacity(fragments.len());

    for fragment in fragments {
        if fragment.name == name {
            has_entry_point = true;
        }

        let text = source
            .read(&fragment.path)
            .map_err(|source| BuildError::Read {
                composite: name.to_string(),
                fragment: fragment.name.clone(),
                path: fragment.path.clone(),
                source,
            })?;
        debug!(
            composite = name,
            fragment = %fragment.name,
            path = %fragment.path,
            bytes = text.len(),
            "loaded fragment"
        );

        // Syntax only; `extends` and `include` resolve once all fragments are loaded
        Template::new(&fragment.name, None, &text).map_err(|source| BuildError::Parse {
            composite: name.to_string(),
            source,
        })?;

        functions = functions.layered(&fragment.functions);
        texts.push((fragment.name.as_str(), text));
    }

    let mut tera = Tera::default();
    config.apply(&mut tera);
    functions.register_on(&mut tera);
    // Loaded together so fragments can extend or include each other in any order
    tera.add_raw_templates(texts)
        .map_err(|source| BuildError::Parse {
            composite: name.to_string(),
            source,
        })?;

    if !has_entry_point {
        return Err(BuildError::InvalidSpec {
            composite: name.to_string(),
        });
    }

    Ok(Composite {
        tera,
        fragments: fragments.iter().map(|f| f.name.clone()).collect(),
    })
}
