//! Error types for lark-core.

use thiserror::Error;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, LarkError>;

/// Errors that can occur while producing output.
///
/// Parsing never fails; only template handling can.
#[derive(Debug, Error)]
pub enum LarkError {
    /// Template source could not be compiled
    #[error("Failed to parse template '{name}': {source}")]
    TemplateParse {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    /// Template compiled but failed while rendering
    #[error("Failed to render template '{name}': {source}")]
    TemplateRender {
        name: String,
        #[source]
        source: minijinja::Error,
    },
}
