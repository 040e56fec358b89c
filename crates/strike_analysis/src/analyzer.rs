//! Waveform analyzer - one buffer in, one `AnalysisResult` out
//!
//! The analyzer holds only its validated configuration. Each call to
//! [`WaveformAnalyzer::analyze`] is a handful of linear scans plus two sorts
//! (peaks and the noise-floor order statistic), and allocates nothing that
//! outlives the call except the result.

use crate::config::AnalysisConfig;
use crate::envelope::{attack_time, decay_time};
use crate::error::AnalysisError;
use crate::peaks::find_peaks;
use crate::result::{AnalysisResult, Quality};
use crate::sample::{magnitudes, normalize_buffer};
use crate::stats::{calculate_amplitude, estimate_noise_floor};
use crate::MIN_NOISE_FLOOR;

/// Single-strike waveform analyzer
///
/// # Example
/// ```
/// use strike_analysis::{AnalysisConfig, WaveformAnalyzer};
///
/// let analyzer = WaveformAnalyzer::new(AnalysisConfig::default()).unwrap();
/// assert!(analyzer.analyze(&[]).is_none());
///
/// let silence = vec![128u8; 512];
/// let result = analyzer.analyze(&silence).unwrap();
/// assert!(result.peaks.is_empty());
/// assert_eq!(result.signal_to_noise, 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WaveformAnalyzer {
    cfg: AnalysisConfig,
}

impl WaveformAnalyzer {
    /// Create an analyzer, rejecting invalid configuration up front
    pub fn new(cfg: AnalysisConfig) -> Result<Self, AnalysisError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Analyzer with the standard calibration at `sample_rate`
    pub fn with_sample_rate(sample_rate: u32) -> Result<Self, AnalysisError> {
        Self::new(AnalysisConfig::for_sample_rate(sample_rate))
    }

    /// Get the configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.cfg
    }

    /// Analyze one captured strike.
    ///
    /// Returns `None` for an empty buffer: there is nothing to analyze, which
    /// is a normal outcome rather than an error.
    pub fn analyze(&self, samples: &[u8]) -> Option<AnalysisResult> {
        if samples.is_empty() {
            return None;
        }
        if samples.len() < 3 {
            log::warn!(
                "Capture has only {} samples; no peak can be detected",
                samples.len()
            );
        }

        let normalized = normalize_buffer(samples);
        let mags = magnitudes(samples);

        let peaks = find_peaks(&normalized, self.cfg.peak_threshold);
        let amplitude = calculate_amplitude(&mags);
        let noise_floor = estimate_noise_floor(&mags, self.cfg.noise_floor_fraction);

        let (attack, decay) = match peaks.first() {
            Some(main) => (
                attack_time(&mags, main.index, self.cfg.envelope_fraction),
                decay_time(
                    &mags,
                    main.index,
                    self.cfg.envelope_fraction,
                    self.cfg.decay_tail,
                ),
            ),
            None => (0, 0),
        };

        let signal_to_noise = amplitude.max / noise_floor.max(MIN_NOISE_FLOOR);
        let dynamic_range = amplitude.max - amplitude.average;
        let quality = Quality::from_signal_to_noise(signal_to_noise);

        log::debug!(
            "Analyzed {} samples: {} peaks, max {:.3}, noise {:.4}, S/N {:.1}, attack {} / decay {} samples, {}",
            samples.len(),
            peaks.len(),
            amplitude.max,
            noise_floor,
            signal_to_noise,
            attack,
            decay,
            quality
        );

        Some(AnalysisResult {
            peaks,
            amplitude,
            noise_floor,
            attack_time: attack,
            decay_time: decay,
            signal_to_noise,
            dynamic_range,
            quality,
            sample_rate: self.cfg.sample_rate,
            sample_count: samples.len(),
        })
    }
}

impl Default for WaveformAnalyzer {
    fn default() -> Self {
        Self {
            cfg: AnalysisConfig::default(),
        }
    }
}

/// Analyze a buffer with the standard calibration.
///
/// `Err` for a zero sample rate, `Ok(None)` for an empty buffer.
pub fn analyze(samples: &[u8], sample_rate: u32) -> Result<Option<AnalysisResult>, AnalysisError> {
    Ok(WaveformAnalyzer::with_sample_rate(sample_rate)?.analyze(samples))
}
