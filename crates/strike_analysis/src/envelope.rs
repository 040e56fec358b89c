//! Attack and decay timing around the dominant peak
//!
//! Both scans work on magnitudes and measure in samples. The envelope level
//! is `fraction * |peak|`; a sample is "below" the envelope when its
//! magnitude is strictly less than that level.

use crate::config::DecayTail;

/// Samples between the attack start and the peak.
///
/// Scans backward from `peak_index`. The attack start is the first sample
/// found below the envelope level; if the scan reaches index 0 without
/// finding one, the whole prefix counts as attack and the result is
/// `peak_index`.
pub fn attack_time(magnitudes: &[f32], peak_index: usize, fraction: f32) -> usize {
    let Some(&peak) = magnitudes.get(peak_index) else {
        return 0;
    };
    let level = peak * fraction;

    let start = magnitudes[..=peak_index]
        .iter()
        .rposition(|&m| m < level)
        .unwrap_or(0);

    peak_index - start
}

/// Samples between the peak and the decay end.
///
/// Scans forward from `peak_index` for the first sample below the envelope
/// level. When the buffer ends first, `tail` decides the answer.
pub fn decay_time(magnitudes: &[f32], peak_index: usize, fraction: f32, tail: DecayTail) -> usize {
    let Some(&peak) = magnitudes.get(peak_index) else {
        return 0;
    };
    let level = peak * fraction;

    match magnitudes[peak_index..].iter().position(|&m| m < level) {
        Some(offset) => offset,
        None => match tail {
            DecayTail::BufferEnd => magnitudes.len() - 1 - peak_index,
            DecayTail::Peak => 0,
        },
    }
}
