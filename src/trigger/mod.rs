//! Trigger configuration synthesis
//!
//! Maps an [`AnalysisResult`] and a pad type onto MegaDrum-style trigger
//! settings. Every parameter carries its value, the module's valid range and
//! the rationale behind the chosen band.
//!
//! Synthesis is a pure function: the same analysis and override always
//! produce the same [`DeviceConfig`].

mod params;
mod pad;
pub mod recommend;
pub mod steps;

pub use pad::{detect_pad_type, PadType};
pub use params::{calculate_threshold, recommend_high_level};
pub use recommend::Recommendations;
pub use steps::{Bound, Curve, Step, StepTable};

use serde::Serialize;
use strike_analysis::{AnalysisResult, Quality};

/// One tunable: value, valid range on the module, and why this value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigParameter<T> {
    pub value: T,
    pub range: &'static str,
    pub description: &'static str,
}

impl<T> ConfigParameter<T> {
    pub fn new(value: T, range: &'static str, description: &'static str) -> Self {
        Self {
            value,
            range,
            description,
        }
    }
}

/// Input sensitivity settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreSettings {
    pub threshold: ConfigParameter<u32>,
    pub gain: ConfigParameter<u32>,
    pub high_level: ConfigParameter<u32>,
}

/// Scan, retrigger and dynamic-threshold timing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingSettings {
    pub min_scan: ConfigParameter<u32>,
    pub retrigger: ConfigParameter<u32>,
    pub dyn_level: ConfigParameter<u32>,
    pub dyn_time: ConfigParameter<u32>,
}

/// Velocity response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicsSettings {
    pub curve: ConfigParameter<Curve>,
    pub compr_lvl: ConfigParameter<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvancedSettings {
    pub xtalk: ConfigParameter<u32>,
}

/// Complete trigger configuration for one analyzed strike
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    /// Pad type the settings are optimized for (override or detected)
    pub pad_type: PadType,
    /// Pad type the classifier chose
    pub detected_type: PadType,
    pub core_settings: CoreSettings,
    pub timing_settings: TimingSettings,
    pub dynamics_settings: DynamicsSettings,
    pub advanced_settings: AdvancedSettings,
    /// Signal quality copied from the analysis
    pub quality: Quality,
    pub recommendations: Recommendations,
}

impl DeviceConfig {
    /// Whether a user override steered away from the detected type
    pub fn is_overridden(&self) -> bool {
        self.pad_type != self.detected_type
    }
}

/// Configuration synthesizer
///
/// Stateless; holds an optional default pad-type override taken from the
/// user's configuration file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSynthesizer {
    default_pad_type: Option<PadType>,
}

impl ConfigSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesizer that optimizes for `pad_type` unless a call overrides it
    pub fn with_pad_type(pad_type: Option<PadType>) -> Self {
        Self {
            default_pad_type: pad_type,
        }
    }

    /// Synthesize a configuration; no analysis means nothing to configure.
    pub fn synthesize(
        &self,
        analysis: Option<&AnalysisResult>,
        pad_type: Option<PadType>,
    ) -> Option<DeviceConfig> {
        analysis.map(|a| self.generate(a, pad_type))
    }

    /// Generate the configuration for one analysis.
    ///
    /// `pad_type` takes precedence over the synthesizer's default override;
    /// with neither, the detected type is used.
    pub fn generate(&self, analysis: &AnalysisResult, pad_type: Option<PadType>) -> DeviceConfig {
        let detected_type = detect_pad_type(analysis);
        let pad_type = pad_type
            .or(self.default_pad_type)
            .unwrap_or(detected_type);

        log::debug!(
            "Synthesizing config: detected {}, optimizing for {}",
            detected_type,
            pad_type
        );

        DeviceConfig {
            pad_type,
            detected_type,
            core_settings: CoreSettings {
                threshold: params::threshold(analysis),
                gain: params::gain(analysis),
                high_level: params::high_level(analysis),
            },
            timing_settings: TimingSettings {
                min_scan: params::min_scan(analysis),
                retrigger: params::retrigger(analysis),
                dyn_level: params::dyn_level(analysis),
                dyn_time: params::dyn_time(analysis),
            },
            dynamics_settings: DynamicsSettings {
                curve: params::curve(analysis),
                compr_lvl: params::compr_lvl(analysis),
            },
            advanced_settings: AdvancedSettings {
                xtalk: params::xtalk(analysis),
            },
            quality: analysis.quality,
            recommendations: Recommendations::for_analysis(analysis, pad_type),
        }
    }
}

/// Synthesize with no default override
pub fn synthesize(analysis: Option<&AnalysisResult>, pad_type: Option<PadType>) -> Option<DeviceConfig> {
    ConfigSynthesizer::new().synthesize(analysis, pad_type)
}
