use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;

use tinytemplate::error::Error as TemplateError;

/// The error type for rendering a chart document.
#[derive(Debug)]
#[non_exhaustive]
pub enum RenderError {
    /// An [io::Error] encountered while writing the document file.
    Io(io::Error),

    /// A [serde_json::Error] encountered while serializing the hover
    /// table of the document.
    JsonSerialization(serde_json::Error),

    /// A [TemplateError] encountered while rendering the page template.
    Template(TemplateError),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let render_error = "render error:";

        match self {
            RenderError::Io(error) => {
                write!(f, "{render_error} could not write the document: {error}")
            }
            RenderError::JsonSerialization(error) => {
                write!(f, "{render_error} could not serialize the hover table: {error}")
            }
            RenderError::Template(error) => {
                write!(f, "{render_error} could not render the page template: {error}")
            }
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::Io(error) => Some(error),
            RenderError::JsonSerialization(error) => Some(error),
            RenderError::Template(error) => Some(error),
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(error: io::Error) -> Self {
        RenderError::Io(error)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(error: serde_json::Error) -> Self {
        RenderError::JsonSerialization(error)
    }
}

impl From<TemplateError> for RenderError {
    fn from(error: TemplateError) -> Self {
        RenderError::Template(error)
    }
}
