//! Error type shared by every host seam.

use thiserror::Error;

/// Failures a page interaction can run into.
///
/// None of these are fatal: callers log them and degrade to doing nothing
/// further for the current event.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A DOM lookup found nothing for the given selector or id.
    #[error("element not found: {0}")]
    MissingElement(String),

    /// A `data-language` value (or stored preference) that is not a known code.
    #[error("unknown language code `{0}`")]
    UnknownLanguage(String),

    /// The host rejected a DOM operation (e.g. a `DOMException`).
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The preference store is disabled or rejected the operation.
    #[error("preference storage unavailable: {0}")]
    Storage(String),

    /// The embedded page configuration could not be parsed.
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl SiteError {
    /// Shorthand for a missing element identified by `id`.
    pub fn missing(id: impl Into<String>) -> Self {
        SiteError::MissingElement(id.into())
    }
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
