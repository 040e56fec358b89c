//! trigger-tune - drum trigger configuration from captured strikes
//!
//! Analyzes a single captured drum strike (unsigned 8-bit samples centered
//! at 128) and derives a complete MegaDrum-style trigger configuration:
//! sensitivity, scan timing, dynamics and crosstalk settings, each with its
//! valid range and rationale, plus troubleshooting advice.
//!
//! # Features
//! - Waveform statistics: peaks, amplitude, noise floor, attack/decay
//! - Pad-type detection (Cymbal, Snare, Kick, Tom, Generic Pad)
//! - Rule-table configuration synthesis with per-parameter rationale
//! - Text, JSON and YAML reports
//! - Raw, JSON and WAV capture files, batch analysis with Rayon
//!
//! # Example
//! ```no_run
//! use trigger_tune::{pipeline::Tuner, report::OutputFormat, Config};
//!
//! let tuner = Tuner::new(Config::default()).unwrap();
//! if let Some(outcome) = tuner.tune_file("strike.wav", None, None).unwrap() {
//!     println!("{}", outcome.render(OutputFormat::Text, true).unwrap());
//! }
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod trigger;

/// Waveform analysis crate
pub use strike_analysis as analysis;

pub use audio::SampleBuffer;
pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{TuneOutcome, Tuner};
pub use strike_analysis::{AnalysisConfig, AnalysisResult, Quality, WaveformAnalyzer};
pub use trigger::{synthesize, ConfigSynthesizer, Curve, DeviceConfig, PadType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default capture sample rate
pub const SAMPLE_RATE: u32 = strike_analysis::DEFAULT_SAMPLE_RATE;
