//! Error types for tomatui.

use thiserror::Error;

/// Errors that can occur in tomatui.
#[derive(Debug, Error)]
pub enum TomatuiError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Task storage could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A referenced item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization to JSON failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
