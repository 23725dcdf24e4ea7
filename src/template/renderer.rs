//! The rendering capability, separate from how templates are stored

use std::io::Write;

use serde::Serialize;

use crate::error::RenderError;
use crate::functions::FunctionMap;

/// Something that renders named templates
pub trait Renderer {
    /// Render template `name` with `data` into `writer`
    ///
    /// `extra` functions are visible to this call only.
    fn render<W, T>(
        &self,
        writer: W,
        name: &str,
        data: &T,
        extra: Option<&FunctionMap>,
    ) -> Result<(), RenderError>
    where
        W: Write,
        T: Serialize + ?Sized;

    /// Render into a buffer so that callers only ever see complete output
    fn render_to_string<T>(
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
}
