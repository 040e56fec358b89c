//! Peak detection over normalized samples

/// A local maximum of |signal| above the detection threshold
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Peak {
    /// Position in the sample buffer
    pub index: usize,
    /// Absolute normalized amplitude
    pub amplitude: f32,
    /// Normalized amplitude with sign (negative = below center)
    pub value: f32,
}

/// Find all threshold-gated local maxima of |signal|.
///
/// Index `i` qualifies when `|x[i]| > threshold` and `|x[i]|` strictly
/// exceeds both neighbours. Endpoints never qualify. The result is sorted
/// by descending amplitude; equal amplitudes keep buffer order, so the first
/// entry is always the dominant peak.
///
/// # Example
/// ```
/// use strike_analysis::peaks::find_peaks;
/// let signal = [0.0, 0.5, 0.1, -0.8, 0.0];
/// let peaks = find_peaks(&signal, 0.3);
/// assert_eq!(peaks.len(), 2);
/// assert_eq!(peaks[0].index, 3);
/// assert_eq!(peaks[0].value, -0.8);
/// ```
pub fn find_peaks(normalized: &[f32], threshold: f32) -> Vec<Peak> {
    if normalized.len() < 3 {
        return Vec::new();
    }

    let mut peaks: Vec<Peak> = normalized
        .windows(3)
        .enumerate()
        .filter_map(|(offset, w)| {
            let (prev, curr, next) = (w[0].abs(), w[1].abs(), w[2].abs());
            (curr > threshold && curr > prev && curr > next).then(|| Peak {
                index: offset + 1,
                amplitude: curr,
                value: w[1],
            })
        })
        .collect();

    // sort_by is stable
    peaks.sort_by(|a, b| b.amplitude.total_cmp(&a.amplitude));
    peaks
}
