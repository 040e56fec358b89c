//! Individual trigger parameter rules

use super::steps::{
    Curve, StepTable, COMPR_LVL, CURVE, DYN_LEVEL, DYN_TIME, GAIN, MIN_SCAN, RETRIGGER, XTALK,
};
use super::ConfigParameter;
use strike_analysis::AnalysisResult;

/// Lowest normalized trigger floor, whatever the noise
const MIN_THRESHOLD: f32 = 0.05;
/// Threshold sits this many times above the noise floor
const NOISE_MARGIN: f32 = 4.0;
/// Threshold never exceeds this share of the observed peak
const SOFT_HIT_HEADROOM: f32 = 0.4;

const HIGH_LEVEL_MIN: u32 = 200;
const HIGH_LEVEL_MAX: u32 = 1023;

/// Trigger floor on the module's 1-100+ scale.
///
/// `max(noise * 4, 0.05)` rejects noise, capped at 40% of the peak so soft
/// hits still trigger. Never below 1.
pub fn calculate_threshold(peak_amplitude: f32, noise_floor: f32) -> u32 {
    let base = (noise_floor * NOISE_MARGIN).max(MIN_THRESHOLD);
    let cap = peak_amplitude * SOFT_HIT_HEADROOM;
    let normalized = base.min(cap);
    (normalized * 100.0).round().max(1.0) as u32
}

/// Signal level for maximum velocity, 200-1023
pub fn recommend_high_level(peak_amplitude: f32) -> u32 {
    let level = (peak_amplitude * HIGH_LEVEL_MAX as f32).round().max(0.0) as u32;
    level.clamp(HIGH_LEVEL_MIN, HIGH_LEVEL_MAX)
}

fn from_table<T: Copy>(table: &StepTable<T>, x: f32, range: &'static str) -> ConfigParameter<T> {
    let step = table.select(x);
    ConfigParameter::new(step.value, range, step.description)
}

pub fn threshold(analysis: &AnalysisResult) -> ConfigParameter<u32> {
    ConfigParameter::new(
        calculate_threshold(analysis.amplitude.max, analysis.noise_floor),
        "1-100+",
        "Minimum signal level to trigger",
    )
}

pub fn gain(analysis: &AnalysisResult) -> ConfigParameter<u32> {
    from_table(&GAIN, analysis.amplitude.max, "0-8")
}

pub fn high_level(analysis: &AnalysisResult) -> ConfigParameter<u32> {
    ConfigParameter::new(
        recommend_high_level(analysis.amplitude.max),
        "200-1023",
        "Signal level for max velocity",
    )
}

pub fn min_scan(analysis: &AnalysisResult) -> ConfigParameter<u32> {
    from_table(&MIN_SCAN, analysis.attack_ms(), "1-100 (0.1-10ms)")
}

/// Driven by peak count: extra peaks in one strike are treated as bounce
pub fn retrigger(analysis: &AnalysisResult) -> ConfigParameter<u32> {
    from_table(&RETRIGGER, analysis.peaks.len() as f32, "4-50ms")
}

pub fn dyn_level(analysis: &AnalysisResult) -> ConfigParameter<u32> {
    from_table(&DYN_LEVEL, analysis.signal_to_noise, "0-15")
}

pub fn dyn_time(analysis: &AnalysisResult) -> ConfigParameter<u32> {
    from_table(&DYN_TIME, analysis.decay_ms(), "8-60ms")
}

pub fn curve(analysis: &AnalysisResult) -> ConfigParameter<Curve> {
    from_table(&CURVE, analysis.dynamic_range, "Linear/Log/Exp/S/Strong/Max")
}

pub fn compr_lvl(analysis: &AnalysisResult) -> ConfigParameter<u32> {
    from_table(&COMPR_LVL, analysis.amplitude.max, "0-7")
}

pub fn xtalk(analysis: &AnalysisResult) -> ConfigParameter<u32> {
    from_table(&XTALK, analysis.signal_to_noise, "0-7")
}
