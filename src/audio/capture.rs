//! Captured strike buffer

use crate::Result;
use strike_analysis::sample::samples_from_values;
use strike_analysis::{AnalysisResult, WaveformAnalyzer, DEFAULT_SAMPLE_RATE, SAMPLE_CENTER};

/// One captured strike: unsigned 8-bit samples centered at 128
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    /// Raw samples (128 = silence)
    pub samples: Vec<u8>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl SampleBuffer {
    /// Create new sample buffer
    pub fn new(samples: Vec<u8>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Buffer of `len` silent samples
    pub fn silence(len: usize, sample_rate: u32) -> Self {
        Self::new(vec![SAMPLE_CENTER; len], sample_rate)
    }

    /// Build from wider integers, rejecting anything outside 0-255
    pub fn from_values<I>(values: I, sample_rate: u32) -> Result<Self>
    where
        I: IntoIterator<Item = i64>,
    {
        Ok(Self::new(samples_from_values(values)?, sample_rate))
    }

    /// Quantize normalized [-1, 1] samples to 8-bit centered samples
    pub fn from_normalized(samples: &[f32], sample_rate: u32) -> Self {
        let center = SAMPLE_CENTER as f32;
        let quantized = samples
            .iter()
            .map(|&x| (x * center + center).round().clamp(0.0, 255.0) as u8)
            .collect();
        Self::new(quantized, sample_rate)
    }

    /// Get duration in seconds
    pub fn duration(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }

    /// Get number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Analyze with the standard calibration at this buffer's sample rate
    pub fn analyze(&self) -> Result<Option<AnalysisResult>> {
        Ok(WaveformAnalyzer::with_sample_rate(self.sample_rate)?.analyze(&self.samples))
    }
}

impl Default for SampleBuffer {
    fn default() -> Self {
        Self::new(Vec::new(), DEFAULT_SAMPLE_RATE)
    }
}

impl AsRef<[u8]> for SampleBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.samples
    }
}
