//! # Strike Analysis - single-transient waveform statistics
//!
//! Analyzes one captured drum strike, delivered as unsigned 8-bit samples
//! centered at 128, and extracts the statistics a trigger module cares about:
//!
//! - **Peaks** - local maxima of |signal| above a detection threshold
//! - **Amplitude** - max, average and RMS magnitude
//! - **Noise floor** - mean of the quietest 20% of samples
//! - **Attack / decay** - samples between the 10%-of-peak crossings and the
//!   dominant peak
//! - **Quality** - Good / Fair / Poor from the signal-to-noise ratio
//!
//! Every call is a pure function of its input buffer. Nothing is cached and
//! the analyzer may be shared freely between threads.
//!
//! ```
//! use strike_analysis::{Quality, WaveformAnalyzer};
//!
//! let mut strike = vec![128u8; 256];
//! strike[100] = 250;
//! strike[101] = 200;
//!
//! let analyzer = WaveformAnalyzer::with_sample_rate(44100).unwrap();
//! let result = analyzer.analyze(&strike).unwrap();
//! assert_eq!(result.peaks[0].index, 100);
//! assert_eq!(result.quality, Quality::Good);
//! ```

pub mod analyzer;
pub mod config;
pub mod envelope;
pub mod error;
pub mod peaks;
pub mod result;
pub mod sample;
pub mod stats;

// Re-export main types
pub use analyzer::{analyze, WaveformAnalyzer};
pub use config::{AnalysisConfig, DecayTail};
pub use error::AnalysisError;
pub use peaks::Peak;
pub use result::{AnalysisResult, Quality};
pub use stats::AmplitudeStats;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raw sample value that represents zero amplitude
pub const SAMPLE_CENTER: u8 = 128;

/// Sample rate assumed when the capture does not say otherwise
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// Minimum normalized magnitude for a local maximum to count as a peak
pub const DEFAULT_PEAK_THRESHOLD: f32 = 0.3;

/// Fraction of the peak magnitude that marks attack start and decay end
pub const DEFAULT_ENVELOPE_FRACTION: f32 = 0.1;

/// Share of the quietest samples averaged into the noise floor
pub const DEFAULT_NOISE_FLOOR_FRACTION: f32 = 0.2;

/// Noise floor substituted when dividing, so silence never divides by zero
pub const MIN_NOISE_FLOOR: f32 = 0.001;
