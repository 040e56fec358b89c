//! End-to-end trigger tuning

use crate::{
    audio::{load_capture_with_default, SampleBuffer},
    config::Config,
    report::{render, OutputFormat, Report},
    trigger::{ConfigSynthesizer, DeviceConfig, PadType},
    Result,
};
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;
use strike_analysis::{AnalysisConfig, AnalysisResult, WaveformAnalyzer};

/// Analysis of one strike and the configuration derived from it
#[derive(Debug, Clone)]
pub struct TuneOutcome {
    pub analysis: AnalysisResult,
    pub config: DeviceConfig,
    /// Processing time in seconds
    pub processing_time: f32,
}

impl TuneOutcome {
    /// Borrow as a renderable report
    pub fn report(&self) -> Report<'_> {
        Report::new(&self.analysis, &self.config)
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat, include_analysis: bool) -> Result<String> {
        render(format, Some(self.report()), include_analysis)
    }

    /// One-line summary for batch listings
    pub fn summary(&self) -> String {
        let core = &self.config.core_settings;
        format!(
            "{} ({} signal): Threshold {}, Gain {}, Retrigger {}ms",
            self.config.pad_type,
            self.analysis.quality,
            core.threshold.value,
            core.gain.value,
            self.config.timing_settings.retrigger.value
        )
    }
}

/// Trigger tuner
///
/// Owns the user configuration and runs captures through analysis and
/// synthesis. Holds no per-capture state, so one tuner can serve a whole
/// batch from several threads.
#[derive(Debug, Clone)]
pub struct Tuner {
    config: Config,
    synthesizer: ConfigSynthesizer,
}

impl Tuner {
    /// Create a tuner from configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let synthesizer = ConfigSynthesizer::with_pad_type(config.synthesis.pad_type);
        Ok(Self {
            config,
            synthesizer,
        })
    }

    /// Load from configuration file
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        Self::new(Config::load(config_path)?)
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analysis parameters for a capture recorded at `sample_rate`
    fn analysis_config(&self, sample_rate: u32) -> AnalysisConfig {
        AnalysisConfig {
            sample_rate,
            ..self.config.analysis
        }
    }

    /// Analyze a capture without synthesizing
    pub fn analyze(&self, buffer: &SampleBuffer) -> Result<Option<AnalysisResult>> {
        let analyzer = WaveformAnalyzer::new(self.analysis_config(buffer.sample_rate))?;
        Ok(analyzer.analyze(&buffer.samples))
    }

    /// Analyze a capture and synthesize its configuration.
    ///
    /// `pad_type` overrides both the configured and the detected pad type.
    /// An empty capture yields `Ok(None)`.
    pub fn tune(&self, buffer: &SampleBuffer, pad_type: Option<PadType>) -> Result<Option<TuneOutcome>> {
        let start = Instant::now();

        let Some(analysis) = self.analyze(buffer)? else {
            log::info!("Capture is empty; nothing to configure");
            return Ok(None);
        };

        let config = self.synthesizer.generate(&analysis, pad_type);
        let processing_time = start.elapsed().as_secs_f32();

        log::debug!(
            "Tuned {} samples in {:.3}ms: {} / {}",
            buffer.len(),
            processing_time * 1000.0,
            config.pad_type,
            analysis.quality
        );

        Ok(Some(TuneOutcome {
            analysis,
            config,
            processing_time,
        }))
    }

    /// Load a capture file and tune it.
    ///
    /// `sample_rate` overrides the rate of raw and JSON captures. Without it,
    /// a JSON capture's embedded rate is used, then the configured rate.
    /// WAV files always use their header rate.
    pub fn tune_file<P: AsRef<Path>>(
        &self,
        path: P,
        sample_rate: Option<u32>,
        pad_type: Option<PadType>,
    ) -> Result<Option<TuneOutcome>> {
        let buffer =
            load_capture_with_default(path, sample_rate, self.config.analysis.sample_rate)?;
        self.tune(&buffer, pad_type)
    }

    /// Tune several capture files in parallel, preserving input order
    pub fn tune_batch<P: AsRef<Path> + Sync>(
        &self,
        paths: &[P],
        sample_rate: Option<u32>,
    ) -> Vec<Result<Option<TuneOutcome>>> {
        paths
            .par_iter()
            .map(|p| self.tune_file(p, sample_rate, None))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::synthetic_strike;
    use crate::Error;
    use strike_analysis::Quality;

    #[test]
    fn test_tune_synthetic_strike() {
        let tuner = Tuner::new(Config::default()).unwrap();
        let outcome = tuner.tune(&synthetic_strike(44100), None).unwrap().unwrap();

        assert_eq!(outcome.analysis.peaks.len(), 1);
        assert_eq!(outcome.analysis.quality, Quality::Good);
        assert_eq!(outcome.config.pad_type, PadType::Cymbal);
        assert_eq!(
            outcome.summary(),
            "Cymbal (Good signal): Threshold 5, Gain 0, Retrigger 4ms"
        );
    }

    #[test]
    fn test_empty_capture_is_not_an_error() {
        let tuner = Tuner::new(Config::default()).unwrap();
        assert!(tuner.tune(&SampleBuffer::default(), None).unwrap().is_none());
    }

    #[test]
    fn test_buffer_rate_overrides_configured_rate() {
        let tuner = Tuner::new(Config::default()).unwrap();
        let outcome = tuner.tune(&synthetic_strike(48000), None).unwrap().unwrap();
        assert_eq!(outcome.analysis.sample_rate, 48000);

        let err = tuner.tune(&SampleBuffer::new(vec![128, 250, 128], 0), None);
        assert!(matches!(err, Err(Error::Analysis(_))));
    }

    #[test]
    fn test_configured_pad_type_and_call_override() {
        let mut config = Config::default();
        config.synthesis.pad_type = Some(PadType::Snare);
        let tuner = Tuner::new(config).unwrap();
        let strike = synthetic_strike(44100);

        let outcome = tuner.tune(&strike, None).unwrap().unwrap();
        assert_eq!(outcome.config.pad_type, PadType::Snare);
        assert_eq!(outcome.config.detected_type, PadType::Cymbal);

        let outcome = tuner.tune(&strike, Some(PadType::Kick)).unwrap().unwrap();
        assert_eq!(outcome.config.pad_type, PadType::Kick);
    }

    #[test]
    fn test_tune_file_uses_embedded_json_rate() {
        let path = std::env::temp_dir().join(format!(
            "trigger_tune_tuner_{}_tagged.json",
            std::process::id()
        ));
        let strike = synthetic_strike(8000);
        let body = serde_json::json!({ "sample_rate": 8000, "samples": strike.samples });
        std::fs::write(&path, body.to_string()).unwrap();

        let mut config = Config::default();
        config.analysis.sample_rate = 48000;
        let tuner = Tuner::new(config).unwrap();

        let embedded = tuner.tune_file(&path, None, None).unwrap().unwrap();
        let overridden = tuner.tune_file(&path, Some(96000), None).unwrap().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(embedded.analysis.sample_rate, 8000);
        assert_eq!(overridden.analysis.sample_rate, 96000);
    }

    #[test]
    fn test_tune_file_raw_uses_configured_rate() {
        let path = std::env::temp_dir().join(format!(
            "trigger_tune_tuner_{}_strike.raw",
            std::process::id()
        ));
        std::fs::write(&path, &synthetic_strike(44100).samples).unwrap();

        let mut config = Config::default();
        config.analysis.sample_rate = 48000;
        let tuner = Tuner::new(config).unwrap();
        let outcome = tuner.tune_file(&path, None, None).unwrap().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(outcome.analysis.sample_rate, 48000);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Config::default();
        config.analysis.peak_threshold = 1.5;
        assert!(matches!(Tuner::new(config), Err(Error::Config(_))));
    }
}
