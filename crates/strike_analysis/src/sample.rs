//! Conversions between raw 8-bit samples and normalized amplitude

use crate::error::AnalysisError;
use crate::SAMPLE_CENTER;

/// Rescale a raw sample to [-1.0, 1.0) around the 128 center.
#[inline]
pub fn normalize(raw: u8) -> f32 {
    (raw as f32 - SAMPLE_CENTER as f32) / SAMPLE_CENTER as f32
}

/// Absolute normalized amplitude of a raw sample.
#[inline]
pub fn magnitude(raw: u8) -> f32 {
    normalize(raw).abs()
}

/// Normalize a whole buffer
pub fn normalize_buffer(samples: &[u8]) -> Vec<f32> {
    samples.iter().map(|&s| normalize(s)).collect()
}

/// Magnitudes of a whole buffer
pub fn magnitudes(samples: &[u8]) -> Vec<f32> {
    samples.iter().map(|&s| magnitude(s)).collect()
}

/// Narrow wider integers (e.g. parsed from JSON) into raw samples.
///
/// Fails on the first value outside 0..=255 rather than clamping, so a
/// malformed capture never turns into plausible-looking statistics.
pub fn samples_from_values<I>(values: I) -> Result<Vec<u8>, AnalysisError>
where
    I: IntoIterator<Item = i64>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            u8::try_from(value).map_err(|_| AnalysisError::SampleOutOfRange { index, value })
        })
        .collect()
}
