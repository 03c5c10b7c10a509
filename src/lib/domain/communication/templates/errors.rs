//! Template errors

use thiserror::Error;

/// Errors raised while loading or composing templates
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No asset with the given name exists
    #[error("template \"{0}\" not found")]
    AssetNotFound(String),

    /// The request cannot be satisfied as given
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The layout does not contain the section marker
    #[error("section marker \"@{0}\" not found in layout")]
    SectionNotFound(String),

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}
