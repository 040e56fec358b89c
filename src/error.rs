//! Error types for trigger-tune

use strike_analysis::AnalysisError;
use thiserror::Error;

/// Main error type for trigger-tune
#[derive(Error, Debug)]
pub enum Error {
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Audio processing error: {0}")]
    Audio(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Unknown pad type: {0} (expected Cymbal, Snare, Kick, Tom or Generic Pad)")]
    UnknownPadType(String),
}

/// Result type for trigger-tune operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<hound::Error> for Error {
    fn from(err: hound::Error) -> Self {
        Error::Audio(err.to_string())
    }
}
