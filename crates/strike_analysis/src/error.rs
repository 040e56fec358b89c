//! Error types for strike analysis

use thiserror::Error;

/// Contract violations detected before any statistics are computed.
///
/// An empty buffer is not an error: the analyzer returns `None` for it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid sample rate: {0} Hz (must be > 0)")]
    InvalidSampleRate(u32),

    #[error("Invalid peak threshold: {0} (must be in (0, 1))")]
    InvalidThreshold(f32),

    #[error("Invalid {name}: {value} (must be in (0, 1])")]
    InvalidFraction { name: &'static str, value: f32 },

    #[error("Sample {index} out of range: {value} (must be 0-255)")]
    SampleOutOfRange { index: usize, value: i64 },
}
