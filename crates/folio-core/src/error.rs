//! Error types for Folio Hero

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for Folio Hero operations
#[derive(Error, Debug)]
pub enum HeroError {
    /// Configuration rejected before the engine starts (empty phrase list, zero delays)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No visibility observer is available; the typewriter stays paused
    #[error("Visibility observer unavailable")]
    MissingObserver,

    /// The static resume asset does not exist
    #[error("Resume not found: {0}")]
    ResumeNotFound(PathBuf),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for HeroError {
    fn from(err: serde_json::Error) -> Self {
        HeroError::Serialization(err.to_string())
    }
}

/// Result type alias using HeroError
pub type HeroResult<T> = Result<T, HeroError>;
