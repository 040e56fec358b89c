//! Report rendering: plain-text configuration export, analysis summary,
//! and JSON / YAML serializations.
//!
//! The text layout is consumed by people pasting it into notes next to the
//! module, so section headers and key names are fixed.

use crate::trigger::{ConfigParameter, DeviceConfig};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strike_analysis::AnalysisResult;

/// Placeholder shown when there is no analysis yet
pub const NO_ANALYSIS: &str = "Record a drum strike to see analysis results";

/// Placeholder shown when there is no configuration yet
pub const NO_CONFIG: &str = "Analyze a drum strike to get configuration recommendations";

/// Width of the rule under the report title
const RULE_WIDTH: usize = 50;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(Error::InvalidFormat(format!(
                "unknown output format '{}' (expected text, json or yaml)",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        })
    }
}

/// Analysis and the configuration derived from it
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report<'a> {
    pub analysis: &'a AnalysisResult,
    pub config: &'a DeviceConfig,
}

impl<'a> Report<'a> {
    pub fn new(analysis: &'a AnalysisResult, config: &'a DeviceConfig) -> Self {
        Self { analysis, config }
    }
}

/// Render a report in the requested format.
///
/// `None` renders the "nothing analyzed" placeholder (text) or `null`.
pub fn render(format: OutputFormat, report: Option<Report<'_>>, include_analysis: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match report {
            None => NO_CONFIG.to_string(),
            Some(r) if include_analysis => {
                format!("{}\n\n{}", AnalysisSummary(r.analysis), r.config)
            }
            Some(r) => r.config.to_string(),
        }),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&report)?),
    }
}

/// Plain-text configuration export
pub fn render_config_text(config: &DeviceConfig) -> String {
    config.to_string()
}

fn write_param<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    param: &ConfigParameter<T>,
    unit: &str,
) -> fmt::Result {
    writeln!(f, "{}: {}{} ({})", name, param.value, unit, param.range)
}

fn write_bullets(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "• {}", item)?;
    }
    Ok(())
}

impl fmt::Display for DeviceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MegaDrum Configuration for {}", self.pad_type)?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(f)?;

        let core = &self.core_settings;
        writeln!(f, "CORE SETTINGS:")?;
        write_param(f, "Threshold", &core.threshold, "")?;
        write_param(f, "Gain", &core.gain, "")?;
        write_param(f, "HighLevel", &core.high_level, "")?;
        writeln!(f)?;

        let timing = &self.timing_settings;
        writeln!(f, "TIMING SETTINGS:")?;
        write_param(f, "MinScan", &timing.min_scan, "")?;
        write_param(f, "Retrigger", &timing.retrigger, "ms")?;
        write_param(f, "DynLevel", &timing.dyn_level, "")?;
        write_param(f, "DynTime", &timing.dyn_time, "ms")?;
        writeln!(f)?;

        let dynamics = &self.dynamics_settings;
        writeln!(f, "DYNAMICS SETTINGS:")?;
        write_param(f, "Curve", &dynamics.curve, "")?;
        write_param(f, "ComprLvl", &dynamics.compr_lvl, "")?;
        writeln!(f)?;

        writeln!(f, "ADVANCED SETTINGS:")?;
        write_param(f, "Xtalk", &self.advanced_settings.xtalk, "")?;
        writeln!(f)?;

        writeln!(f, "SIGNAL QUALITY: {}", self.quality)?;
        writeln!(f)?;

        let recs = &self.recommendations;
        writeln!(f, "GENERAL RECOMMENDATIONS:")?;
        write_bullets(f, &recs.general)?;
        write!(f, "\n\n")?;

        writeln!(f, "SPECIFIC RECOMMENDATIONS:")?;
        write_bullets(f, &recs.specific)?;
        write!(f, "\n\n")?;

        writeln!(f, "SETUP GUIDE:")?;
        write_bullets(f, &recs.setup)
    }
}

/// Human-readable summary of an analysis, as shown next to the waveform
pub struct AnalysisSummary<'a>(pub &'a AnalysisResult);

impl fmt::Display for AnalysisSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.0;
        writeln!(f, "Waveform Analysis ({} Signal)", a.quality)?;
        writeln!(f, "Amplitude:")?;
        writeln!(f, "  Peak: {:.1}%", a.amplitude.max * 100.0)?;
        writeln!(f, "  Average: {:.1}%", a.amplitude.average * 100.0)?;
        writeln!(f, "  RMS: {:.1}%", a.amplitude.rms * 100.0)?;
        writeln!(f, "Timing:")?;
        writeln!(f, "  Attack: {} samples", a.attack_time)?;
        writeln!(f, "  Decay: {} samples", a.decay_time)?;
        writeln!(f, "  Peaks Found: {}", a.peaks.len())?;
        writeln!(f, "Signal Quality:")?;
        writeln!(f, "  Noise Floor: {:.2}%", a.noise_floor * 100.0)?;
        writeln!(f, "  S/N Ratio: {:.1}:1", a.signal_to_noise)?;
        writeln!(f, "Dynamic Range:")?;
        writeln!(f, "  Range: {:.1}%", a.dynamic_range * 100.0)?;
        write!(f, "  Quality: {}", a.quality)
    }
}

/// Analysis summary text, or the placeholder when nothing was analyzed
pub fn render_analysis_text(analysis: Option<&AnalysisResult>) -> String {
    match analysis {
        Some(a) => AnalysisSummary(a).to_string(),
        None => NO_ANALYSIS.to_string(),
    }
}
