//! Composite templates assembled from file fragments
//!
//! A composite is a named group of fragments compiled into one engine
//! instance. One of its fragments carries the composite's own name and is the
//! entry point rendered under that name; the others are available to it
//! through `include`, `extends` and `import`.
//!
//! # Example
//!
//! ```text
//! page.html:    {% extends "layout" %}{% block body %}Hello {{ name }}{% endblock body %}
//! layout.html:  <main>{% block body %}{% endblock body %}</main>
//!
//! composite "page" = [page -> page.html, layout -> layout.html]
//! render("page", {name: "World"})  =>  <main>Hello World</main>
//! ```

mod registry;
mod renderer;

pub use registry::TemplateRegistry;
pub use renderer::Renderer;
