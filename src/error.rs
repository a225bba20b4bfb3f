//! Error types

use thiserror::Error;

/// Errors raised while loading options or parsing option tokens.
///
/// Building a connection string never fails; these only come from the
/// configuration and parsing entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Failed to read a configuration source
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration document
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, Error>;
