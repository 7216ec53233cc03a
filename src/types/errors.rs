//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the notification layer.
///
/// The translators themselves define no error conditions (a malformed
/// descriptor is the engine's contract to avoid); errors here come from the
/// bus and configuration surfaces.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation errors (bad subscription arguments, empty topic names).
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
