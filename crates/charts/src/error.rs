//! Defines the error types that this crate uses.

use std::error::Error;
use std::fmt::Display;

use tinytemplate::error::Error as TinyTemplateError;

/// The error type for rendering a tooltip document as an HTML fragment.
#[derive(Debug)]
#[non_exhaustive]
pub enum RenderError {
    /// A template error encountered while parsing or rendering
    /// the tooltip template.
    Template(TinyTemplateError),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let render_error = "render error:";

        match self {
            RenderError::Template(error) => {
                write!(f, "{render_error} could not render the template: {error}")
            }
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RenderError::Template(error) => Some(error),
        }
    }
}

impl From<TinyTemplateError> for RenderError {
    fn from(error: TinyTemplateError) -> Self {
        RenderError::Template(error)
    }
}
