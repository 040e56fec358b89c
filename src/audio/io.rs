//! Capture file I/O
//!
//! Strikes recorded elsewhere arrive as one of:
//! - raw unsigned 8-bit dumps (`.raw`, `.bin`, `.u8`), exactly what an
//!   oscilloscope-style byte capture produces
//! - JSON, either a bare array of sample values or
//!   `{"sample_rate": 48000, "samples": [...]}`
//! - WAV (any PCM or float depth), mixed to mono and quantized to 8 bits

use super::SampleBuffer;
use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use serde::Deserialize;
use std::path::Path;
use strike_analysis::{DEFAULT_SAMPLE_RATE, SAMPLE_CENTER};

/// Capture file format, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureFormat {
    Raw,
    Json,
    Wav,
}

impl CaptureFormat {
    /// Detect the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("raw") | Some("bin") | Some("u8") => Ok(CaptureFormat::Raw),
            Some("json") => Ok(CaptureFormat::Json),
            Some("wav") | Some("wave") => Ok(CaptureFormat::Wav),
            _ => Err(Error::InvalidFormat(format!(
                "{}: expected .raw, .bin, .u8, .json or .wav",
                path.display()
            ))),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCapture {
    Samples(Vec<i64>),
    Tagged {
        samples: Vec<i64>,
        #[serde(default)]
        sample_rate: Option<u32>,
    },
}

/// Load a capture file
///
/// # Arguments
/// * `path` - Capture file
/// * `sample_rate` - Rate override for raw and JSON captures. WAV headers
///   always win; a conflicting value is only logged, never resampled.
pub fn load_capture<P: AsRef<Path>>(path: P, sample_rate: Option<u32>) -> Result<SampleBuffer> {
    load_capture_with_default(path, sample_rate, DEFAULT_SAMPLE_RATE)
}

/// Load a capture file, falling back to `default_rate` when neither the
/// caller nor the file gives a rate.
///
/// Rate precedence for JSON: `sample_rate`, then the embedded rate, then
/// `default_rate`. Raw dumps carry no rate of their own.
pub fn load_capture_with_default<P: AsRef<Path>>(
    path: P,
    sample_rate: Option<u32>,
    default_rate: u32,
) -> Result<SampleBuffer> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let buffer = match CaptureFormat::from_path(path)? {
        CaptureFormat::Raw => {
            let bytes = std::fs::read(path)?;
            SampleBuffer::new(bytes, sample_rate.unwrap_or(default_rate))
        }
        CaptureFormat::Json => {
            let content = std::fs::read_to_string(path)?;
            match serde_json::from_str::<JsonCapture>(&content)
                .map_err(|e| Error::InvalidFormat(format!("{}: {}", path.display(), e)))?
            {
                JsonCapture::Samples(values) => {
                    SampleBuffer::from_values(values, sample_rate.unwrap_or(default_rate))?
                }
                JsonCapture::Tagged {
                    samples,
                    sample_rate: embedded,
                } => SampleBuffer::from_values(
                    samples,
                    sample_rate.or(embedded).unwrap_or(default_rate),
                )?,
            }
        }
        CaptureFormat::Wav => {
            let buffer = load_wav(path)?;
            if let Some(requested) = sample_rate {
                if requested != buffer.sample_rate {
                    log::warn!(
                        "{} is {} Hz; ignoring requested {} Hz",
                        path.display(),
                        buffer.sample_rate,
                        requested
                    );
                }
            }
            buffer
        }
    };

    log::debug!(
        "Loaded {} samples at {} Hz from {}",
        buffer.len(),
        buffer.sample_rate,
        path.display()
    );
    Ok(buffer)
}

fn load_wav(path: &Path) -> Result<SampleBuffer> {
    let reader = WavReader::open(path).map_err(|e| Error::Audio(format!("Failed to open WAV: {}", e)))?;
    let spec = reader.spec();
    let channels = spec.channels.max(1) as usize;

    // Read samples based on format, normalized to [-1, 1]
    let samples: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::Audio(format!("Failed to read samples: {}", e)))?,
        SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| Error::Audio(format!("Failed to read samples: {}", e)))?
        }
    };

    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(Error::InvalidFormat(format!(
            "{}: non-finite sample at index {}",
            path.display(),
            index
        )));
    }

    // Convert to mono if stereo
    let mono: Vec<f32> = if channels > 1 {
        samples
            .chunks(channels)
            .map(|chunk| chunk.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        samples
    };

    Ok(SampleBuffer::from_normalized(&mono, spec.sample_rate))
}

/// Save a capture as 8-bit mono WAV
pub fn save_capture<P: AsRef<Path>>(path: P, buffer: &SampleBuffer) -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate,
        bits_per_sample: 8,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)
        .map_err(|e| Error::Audio(format!("Failed to create WAV writer: {}", e)))?;

    for &sample in &buffer.samples {
        let signed = (sample as i16 - SAMPLE_CENTER as i16) as i8;
        writer
            .write_sample(signed)
            .map_err(|e| Error::Audio(format!("Failed to write sample: {}", e)))?;
    }

    writer
        .finalize()
        .map_err(|e| Error::Audio(format!("Failed to finalize WAV: {}", e)))?;

    Ok(())
}

/// Save a capture as a raw 8-bit dump
pub fn save_raw<P: AsRef<Path>>(path: P, buffer: &SampleBuffer) -> Result<()> {
    std::fs::write(path, &buffer.samples)?;
    Ok(())
}

/// Load multiple capture files in parallel
pub fn load_capture_batch<P: AsRef<Path> + Sync>(
    paths: &[P],
    sample_rate: Option<u32>,
) -> Vec<Result<SampleBuffer>> {
    use rayon::prelude::*;

    paths
        .par_iter()
        .map(|p| load_capture(p, sample_rate))
        .collect()
}
