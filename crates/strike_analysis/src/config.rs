//! Analysis configuration
//!
//! Tunable detection parameters. The defaults reproduce the calibration the
//! trigger-configuration rules were written against; change them only when
//! the capture chain is known to differ (e.g. very quiet piezos).

use crate::error::AnalysisError;
use crate::{
    DEFAULT_ENVELOPE_FRACTION, DEFAULT_NOISE_FLOOR_FRACTION, DEFAULT_PEAK_THRESHOLD,
    DEFAULT_SAMPLE_RATE,
};

/// What to report as decay time when the signal never falls back below the
/// envelope level before the buffer ends (a truncated capture).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DecayTail {
    /// Distance from the peak to the last sample of the buffer
    #[default]
    BufferEnd,
    /// Decay end stays at the peak, so the decay time is 0
    Peak,
}

/// Configuration for single-strike analysis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    /// Capture sample rate in Hz
    /// Default: 44100
    pub sample_rate: u32,

    /// Minimum normalized magnitude for a peak (exclusive)
    /// Default: 0.3
    pub peak_threshold: f32,

    /// Fraction of peak magnitude marking attack start / decay end
    /// Default: 0.1
    pub envelope_fraction: f32,

    /// Share of quietest samples averaged into the noise floor
    /// Default: 0.2
    pub noise_floor_fraction: f32,

    /// Decay reported for captures that never decay
    /// Default: BufferEnd
    pub decay_tail: DecayTail,
}

impl AnalysisConfig {
    /// Standard calibration at the given sample rate
    ///
    /// # Example
    /// ```
    /// use strike_analysis::AnalysisConfig;
    /// let config = AnalysisConfig::for_sample_rate(48000);
    /// assert_eq!(config.sample_rate, 48000);
    /// assert_eq!(config.peak_threshold, 0.3);
    /// ```
    pub const fn for_sample_rate(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            peak_threshold: DEFAULT_PEAK_THRESHOLD,
            envelope_fraction: DEFAULT_ENVELOPE_FRACTION,
            noise_floor_fraction: DEFAULT_NOISE_FLOOR_FRACTION,
            decay_tail: DecayTail::BufferEnd,
        }
    }

    /// Standard calibration, but truncated captures report zero decay
    pub const fn legacy(sample_rate: u32) -> Self {
        let mut config = Self::for_sample_rate(sample_rate);
        config.decay_tail = DecayTail::Peak;
        config
    }

    /// Lower peak threshold for quiet pads and low-output piezos
    pub const fn sensitive(sample_rate: u32) -> Self {
        let mut config = Self::for_sample_rate(sample_rate);
        config.peak_threshold = 0.2;
        config
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.sample_rate == 0 {
            return Err(AnalysisError::InvalidSampleRate(self.sample_rate));
        }
        if !(self.peak_threshold > 0.0 && self.peak_threshold < 1.0) {
            return Err(AnalysisError::InvalidThreshold(self.peak_threshold));
        }
        check_fraction("envelope_fraction", self.envelope_fraction)?;
        check_fraction("noise_floor_fraction", self.noise_floor_fraction)?;
        Ok(())
    }
}

fn check_fraction(name: &'static str, value: f32) -> Result<(), AnalysisError> {
    // NaN fails both comparisons
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(AnalysisError::InvalidFraction { name, value })
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::for_sample_rate(DEFAULT_SAMPLE_RATE)
    }
}
