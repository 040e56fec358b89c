//! Capture-to-configuration pipeline
//!
//! Coordinates capture loading, waveform analysis, configuration synthesis
//! and report rendering.

mod tuner;

pub use tuner::{TuneOutcome, Tuner};
