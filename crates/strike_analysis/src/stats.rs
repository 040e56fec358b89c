//! Amplitude statistics and noise-floor estimation

/// Magnitude statistics of a whole buffer, in normalized [0, 1] space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmplitudeStats {
    /// Largest magnitude
    pub max: f32,
    /// Arithmetic mean of magnitudes
    pub average: f32,
    /// Root mean square of magnitudes
    pub rms: f32,
}

/// Compute max, mean and RMS of the given magnitudes.
///
/// An empty slice yields all zeros.
pub fn calculate_amplitude(magnitudes: &[f32]) -> AmplitudeStats {
    if magnitudes.is_empty() {
        return AmplitudeStats::default();
    }

    let n = magnitudes.len() as f32;
    let max = magnitudes.iter().copied().fold(0.0f32, f32::max);
    let average = magnitudes.iter().sum::<f32>() / n;
    let rms = (magnitudes.iter().map(|m| m * m).sum::<f32>() / n).sqrt();

    AmplitudeStats {
        // Rounding in the sums must not push the mean statistics past the max
        max,
        average: average.min(max),
        rms: rms.min(max),
    }
}

/// Estimate the noise floor as the mean of the quietest `fraction` of
/// magnitudes (at least one sample). Pure order statistic, no spectral work.
pub fn estimate_noise_floor(magnitudes: &[f32], fraction: f32) -> f32 {
    if magnitudes.is_empty() {
        return 0.0;
    }

    let mut sorted = magnitudes.to_vec();
    sorted.sort_by(f32::total_cmp);

    let count = ((sorted.len() as f32 * fraction).floor() as usize).clamp(1, sorted.len());
    sorted[..count].iter().sum::<f32>() / count as f32
}
