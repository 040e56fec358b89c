//! Capture handling for trigger-tune
//!
//! Provides the 8-bit strike buffer, capture file I/O, and synthetic strikes.

mod capture;
mod io;
pub mod synthetic;

pub use capture::SampleBuffer;
pub use io::{
    load_capture, load_capture_batch, load_capture_with_default, save_capture, save_raw,
    CaptureFormat,
};
pub use synthetic::{bouncing_strike, synthetic_strike, StrikeShape};
