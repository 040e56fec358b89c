//! Analysis result - the output of strike analysis
//!
//! One `AnalysisResult` per analyzed buffer. It is the only value passed on
//! to configuration synthesis and presentation.

use std::fmt;

use crate::peaks::Peak;
use crate::stats::AmplitudeStats;

/// Signal quality classification from the signal-to-noise ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quality {
    /// S/N above 10
    Good,
    /// S/N above 5, up to 10
    Fair,
    /// S/N of 5 or less
    Poor,
}

impl Quality {
    /// Classify a signal-to-noise ratio (strict lower bounds)
    pub fn from_signal_to_noise(snr: f32) -> Self {
        if snr > 10.0 {
            Quality::Good
        } else if snr > 5.0 {
            Quality::Fair
        } else {
            Quality::Poor
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Quality::Good => "Good",
            Quality::Fair => "Fair",
            Quality::Poor => "Poor",
        }
    }

    /// Convert to descriptive string
    pub fn description(&self) -> &'static str {
        match self {
            Quality::Good => "clean signal, well above the noise floor",
            Quality::Fair => "usable signal with noticeable noise",
            Quality::Poor => "signal barely separates from noise",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Statistics of one analyzed strike
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnalysisResult {
    /// Detected peaks, dominant first
    pub peaks: Vec<Peak>,
    /// Buffer-wide magnitude statistics
    pub amplitude: AmplitudeStats,
    /// Mean magnitude of the quietest samples
    pub noise_floor: f32,
    /// Attack length in samples (0 without a peak)
    pub attack_time: usize,
    /// Decay length in samples (0 without a peak)
    pub decay_time: usize,
    /// `amplitude.max / max(noise_floor, 0.001)`
    pub signal_to_noise: f32,
    /// `amplitude.max - amplitude.average`
    pub dynamic_range: f32,
    /// Quality band of `signal_to_noise`
    pub quality: Quality,
    /// Sample rate the buffer was captured at
    pub sample_rate: u32,
    /// Number of samples analyzed
    pub sample_count: usize,
}

impl AnalysisResult {
    /// The dominant peak, if any
    pub fn main_peak(&self) -> Option<&Peak> {
        self.peaks.first()
    }

    /// Convert a sample count to milliseconds at the capture rate
    pub fn samples_to_ms(&self, samples: usize) -> f32 {
        samples as f32 / self.sample_rate as f32 * 1000.0
    }

    /// Attack time in milliseconds
    pub fn attack_ms(&self) -> f32 {
        self.samples_to_ms(self.attack_time)
    }

    /// Decay time in milliseconds
    pub fn decay_ms(&self) -> f32 {
        self.samples_to_ms(self.decay_time)
    }

    /// Capture duration in seconds
    pub fn duration(&self) -> f32 {
        self.sample_count as f32 / self.sample_rate as f32
    }
}
