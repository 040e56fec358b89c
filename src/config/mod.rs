//! Configuration management for trigger-tune

use crate::report::OutputFormat;
use crate::trigger::PadType;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strike_analysis::AnalysisConfig;

/// Main configuration for trigger-tune
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Waveform analysis parameters
    pub analysis: AnalysisConfig,
    /// Trigger configuration synthesis settings
    pub synthesis: SynthesisConfig,
    /// Report output settings
    pub report: ReportConfig,
}

/// Configuration synthesis settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Pad type to optimize for instead of the detected one
    pub pad_type: Option<PadType>,
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format
    pub format: OutputFormat,
    /// Prepend the waveform analysis summary to text reports
    pub include_analysis: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            include_analysis: true,
        }
    }
}

impl Config {
    /// Load configuration from YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Create default configuration and save to file
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.analysis
            .validate()
            .map_err(|e| Error::Config(e.to_string()))?;

        if self.analysis.sample_rate < 8000 {
            log::warn!(
                "Sample rate {} Hz is unusually low for drum triggers; timing bands assume 44.1/48 kHz captures",
                self.analysis.sample_rate
            );
        }

        Ok(())
    }
}
