//! Advisory text attached to a generated configuration

use super::PadType;
use serde::Serialize;
use strike_analysis::AnalysisResult;

pub const CLIPPING: &str = "Signal clipping - reduce Gain or use voltage divider";
pub const VERY_HOT: &str = "Very hot signal - consider reducing Gain";
pub const WEAK_SIGNAL: &str = "Weak signal - increase Gain or check connections";
pub const MULTIPLE_PEAKS: &str = "Multiple peaks detected - increase Retrigger time";
pub const LOOSE_HARDWARE: &str = "Check for loose hardware or vibrations";
pub const HIGH_NOISE: &str = "High noise - increase Threshold and Xtalk settings";
pub const SHIELDING: &str = "Use shielded cables and proper grounding";
pub const LIMITED_DYNAMICS: &str = "Limited dynamics - adjust HighLevel for better range";

const SETUP_GUIDE: [&str; 5] = [
    "Navigation: Main Menu → Pads → Select Input",
    "Enable HiLvlAuto initially for guidance",
    "Test with various hit strengths to verify velocity range",
    "Use Big VU Meter for precise level monitoring",
    "Save configuration when satisfied with settings",
];

/// Recommendations in display order. No deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Recommendations {
    pub general: Vec<String>,
    pub specific: Vec<String>,
    pub setup: Vec<String>,
}

impl Recommendations {
    pub fn for_analysis(analysis: &AnalysisResult, pad_type: PadType) -> Self {
        Self {
            general: general(pad_type),
            specific: specific(analysis),
            setup: setup(),
        }
    }
}

pub fn general(pad_type: PadType) -> Vec<String> {
    vec![
        format!("Detected pad type: {}", pad_type),
        "Use HiLvlAuto initially to find optimal HighLevel".to_string(),
        "Set Threshold above noise floor but allow soft hits".to_string(),
        "Adjust MinScan based on pad type (rubber vs mesh)".to_string(),
    ]
}

/// Signal-specific warnings. Only clipping / very hot exclude each other;
/// every other check fires independently.
pub fn specific(analysis: &AnalysisResult) -> Vec<String> {
    let mut advice = Vec::new();
    let max = analysis.amplitude.max;

    if max > 0.9 {
        advice.push(CLIPPING);
    } else if max > 0.8 {
        advice.push(VERY_HOT);
    }

    if max < 0.1 {
        advice.push(WEAK_SIGNAL);
    }

    if analysis.peaks.len() > 5 {
        advice.push(MULTIPLE_PEAKS);
        advice.push(LOOSE_HARDWARE);
    }

    if analysis.signal_to_noise < 3.0 {
        advice.push(HIGH_NOISE);
        advice.push(SHIELDING);
    }

    if analysis.dynamic_range < 0.2 {
        advice.push(LIMITED_DYNAMICS);
    }

    advice.into_iter().map(String::from).collect()
}

pub fn setup() -> Vec<String> {
    SETUP_GUIDE.iter().map(|s| s.to_string()).collect()
}
