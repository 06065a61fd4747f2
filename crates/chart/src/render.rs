//! Serializes a chart scene into a self-contained HTML document.

pub mod error;
pub mod output;
pub mod page;

pub(crate) mod svg;

use crate::render::error::RenderError;

/// A destination for rendered document text.
pub trait OutputStream {
    fn write(&mut self, data: &str) -> Result<(), RenderError>;
}

/// Writes a document fragment into an [OutputStream].
pub trait Render {
    fn render<O>(&self, output: &mut O) -> Result<(), RenderError>
    where
        O: OutputStream;
}
