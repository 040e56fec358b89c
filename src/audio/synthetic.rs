//! Synthetic strike captures for demos, smoke tests and benchmarks

use super::SampleBuffer;
use strike_analysis::SAMPLE_CENTER;

/// Shape of a synthetic strike: flat baseline, instant spike, linear decay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrikeShape {
    /// Total number of samples
    pub length: usize,
    /// Index of the spike
    pub peak_index: usize,
    /// Raw value at the spike (128 = silence)
    pub peak_value: u8,
    /// Samples from the spike back to the baseline
    pub decay_samples: usize,
}

impl Default for StrikeShape {
    fn default() -> Self {
        Self {
            length: 2048,
            peak_index: 1024,
            peak_value: 250,
            decay_samples: 50,
        }
    }
}

impl StrikeShape {
    /// Render the strike at `sample_rate`.
    ///
    /// The ramp uses integer interpolation, so it is strictly monotonic and
    /// produces exactly one local maximum at `peak_index`.
    pub fn render(&self, sample_rate: u32) -> SampleBuffer {
        let mut samples = vec![SAMPLE_CENTER; self.length];
        let center = SAMPLE_CENTER as i32;
        let height = self.peak_value as i32 - center;
        let decay = self.decay_samples.max(1);

        for k in 0..=self.decay_samples {
            let Some(slot) = samples.get_mut(self.peak_index + k) else {
                break;
            };
            let offset = height * (decay - k) as i32 / decay as i32;
            *slot = (center + offset).clamp(0, 255) as u8;
        }

        SampleBuffer::new(samples, sample_rate)
    }
}

/// Default synthetic strike: 2048 samples, spike to 250 at 1024, 50-sample decay
pub fn synthetic_strike(sample_rate: u32) -> SampleBuffer {
    StrikeShape::default().render(sample_rate)
}

/// Strike followed by `bounces` separated rebounds of falling height.
///
/// Each rebound is an isolated three-sample bump, so every one of them
/// registers as a separate peak.
pub fn bouncing_strike(bounces: usize, sample_rate: u32) -> SampleBuffer {
    let mut buffer = StrikeShape {
        length: 2048,
        peak_index: 256,
        peak_value: 250,
        decay_samples: 20,
    }
    .render(sample_rate);

    for i in 0..bounces {
        let index = 400 + i * 100;
        let Some(window) = buffer.samples.get_mut(index - 1..=index + 1) else {
            break;
        };
        let top = 240u8.saturating_sub((i * 8) as u8).max(180);
        window.copy_from_slice(&[150, top, 150]);
    }

    buffer
}
