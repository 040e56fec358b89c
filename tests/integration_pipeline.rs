//! Pipeline Integration Tests for trigger-tune
//!
//! These tests verify the complete flow from captured strike to trigger
//! configuration: capture → analysis → pad detection → synthesis → report
//!
//! # Test Categories
//!
//! 1. **Analysis Scenarios**: silence, clean strike, bouncing strike
//! 2. **Noisy Captures**: randomized invariant checks
//! 3. **Capture I/O**: WAV, raw and JSON round trips, batch loading
//! 4. **Configuration**: YAML round trip and validation
//! 5. **Error Handling**: missing files, bad formats, bad overrides

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use trigger_tune::audio::{
    bouncing_strike, load_capture, load_capture_batch, save_capture, save_raw, synthetic_strike,
    SampleBuffer,
};
use trigger_tune::report::{render, render_analysis_text, OutputFormat, NO_CONFIG};
use trigger_tune::trigger::recommend::{CLIPPING, LOOSE_HARDWARE, MULTIPLE_PEAKS, VERY_HOT};
use trigger_tune::{synthesize, Config, Curve, Error, PadType, Quality, Tuner};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("trigger_tune_it_{}_{}", std::process::id(), name))
}

// ============================================================================
// Analysis Scenarios
// ============================================================================

/// Test: Silence has no peaks and a Poor quality rating
#[test]
fn test_silence() {
    println!("🔇 Testing silent capture:");

    let analysis = SampleBuffer::silence(2048, 44100).analyze().unwrap().unwrap();

    assert!(analysis.peaks.is_empty());
    assert_eq!(analysis.amplitude.max, 0.0);
    assert_eq!(analysis.noise_floor, 0.0);
    assert_eq!(analysis.signal_to_noise, 0.0);
    assert_eq!(analysis.attack_time, 0);
    assert_eq!(analysis.decay_time, 0);
    assert_eq!(analysis.quality, Quality::Poor);

    // Silence still gets a (weak-signal) configuration
    let config = synthesize(Some(&analysis), None).unwrap();
    assert_eq!(config.core_settings.threshold.value, 1);
    assert_eq!(config.core_settings.gain.value, 8);
    assert_eq!(config.core_settings.high_level.value, 200);
    println!("✅ Poor signal, threshold {}", config.core_settings.threshold.value);
}

/// Test: Clean spike with linear decay
#[test]
fn test_clean_strike_end_to_end() {
    println!("🥁 Testing clean strike:");

    let tuner = Tuner::new(Config::default()).unwrap();
    let outcome = tuner.tune(&synthetic_strike(44100), None).unwrap().unwrap();
    let analysis = &outcome.analysis;

    assert_eq!(analysis.peaks.len(), 1);
    assert_eq!(analysis.peaks[0].index, 1024);
    assert_eq!(analysis.attack_time, 1);
    assert!((45..=50).contains(&analysis.decay_time));
    assert_eq!(analysis.quality, Quality::Good);

    let config = &outcome.config;
    assert_eq!(config.detected_type, PadType::Cymbal);
    assert_eq!(config.timing_settings.retrigger.value, 4);
    assert_eq!(config.timing_settings.min_scan.value, 10);
    assert_eq!(config.dynamics_settings.curve.value, Curve::Log3);

    // Peak of 250 is ~0.953: clipping, never "very hot" as well
    assert_eq!(config.recommendations.specific, vec![CLIPPING.to_string()]);
    assert!(!config.recommendations.specific.iter().any(|s| s == VERY_HOT));
    println!("✅ {}", outcome.summary());
}

/// Test: Rebounds register as extra peaks and lengthen retrigger
#[test]
fn test_bouncing_strike() {
    println!("🏀 Testing bouncing strike:");

    let analysis = bouncing_strike(5, 44100).analyze().unwrap().unwrap();
    assert_eq!(analysis.peaks.len(), 6);
    assert_eq!(analysis.peaks[0].index, 256);
    assert!(analysis
        .peaks
        .windows(2)
        .all(|w| w[0].amplitude >= w[1].amplitude));

    let config = synthesize(Some(&analysis), None).unwrap();
    assert_eq!(config.timing_settings.retrigger.value, 20);

    let specific = &config.recommendations.specific;
    let multiple = specific.iter().position(|s| s == MULTIPLE_PEAKS).unwrap();
    assert_eq!(specific[multiple + 1], LOOSE_HARDWARE);
    println!("✅ {} peaks, retrigger 20ms", analysis.peaks.len());
}

/// Test: Analysis and synthesis are pure functions of their input
#[test]
fn test_idempotence() {
    println!("🔁 Testing idempotence:");

    let strike = bouncing_strike(3, 48000);
    let first = strike.analyze().unwrap();
    let second = strike.analyze().unwrap();
    assert_eq!(first, second);

    let first_config = synthesize(first.as_ref(), Some(PadType::Snare));
    let second_config = synthesize(second.as_ref(), Some(PadType::Snare));
    assert_eq!(first_config, second_config);
    println!("✅ Identical");
}

/// Test: Empty capture produces the placeholder report
#[test]
fn test_empty_capture_report() {
    println!("📭 Testing empty capture:");

    let tuner = Tuner::new(Config::default()).unwrap();
    let outcome = tuner.tune(&SampleBuffer::default(), None).unwrap();
    assert!(outcome.is_none());
    assert_eq!(render(OutputFormat::Text, None, true).unwrap(), NO_CONFIG);
    assert_eq!(
        render_analysis_text(None),
        "Record a drum strike to see analysis results"
    );
    println!("✅ Placeholder");
}

// ============================================================================
// Noisy Captures
// ============================================================================

fn noisy_strike(rng: &mut StdRng) -> SampleBuffer {
    let len = rng.gen_range(3..4096);
    let noise = rng.gen_range(0..12i32);
    let mut samples: Vec<u8> = (0..len)
        .map(|_| (128 + rng.gen_range(-noise..=noise)) as u8)
        .collect();

    let peak_index = rng.gen_range(0..len);
    let height = rng.gen_range(-128..=127i32);
    let decay = rng.gen_range(1..200usize);
    for k in 0..decay {
        let Some(slot) = samples.get_mut(peak_index + k) else {
            break;
        };
        let offset = height * (decay - k) as i32 / decay as i32;
        *slot = (*slot as i32 + offset).clamp(0, 255) as u8;
    }

    SampleBuffer::new(samples, 44100)
}

/// Test: Invariants hold for randomized noisy strikes
#[test]
fn test_noisy_strike_invariants() {
    println!("🎲 Testing noisy strikes:");

    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let buffer = noisy_strike(&mut rng);
        let analysis = buffer.analyze().unwrap().unwrap();
        let mags: Vec<f32> = buffer
            .samples
            .iter()
            .map(|&s| (s as f32 - 128.0).abs() / 128.0)
            .collect();

        let amp = &analysis.amplitude;
        assert!(amp.max >= amp.average && amp.average >= 0.0);
        assert!(amp.max >= amp.rms && amp.rms >= 0.0);
        assert!(analysis.noise_floor <= amp.average + 1e-4);
        assert_eq!(
            analysis.quality,
            Quality::from_signal_to_noise(analysis.signal_to_noise)
        );

        for peak in &analysis.peaks {
            let i = peak.index;
            assert!(i > 0 && i + 1 < mags.len());
            assert!(peak.amplitude > 0.3);
            assert!(mags[i] > mags[i - 1] && mags[i] > mags[i + 1]);
        }
        assert!(analysis
            .peaks
            .windows(2)
            .all(|w| w[0].amplitude >= w[1].amplitude));

        if analysis.peaks.is_empty() {
            assert_eq!(analysis.attack_time, 0);
            assert_eq!(analysis.decay_time, 0);
        }

        let config = synthesize(Some(&analysis), None).unwrap();
        assert!(config.core_settings.threshold.value >= 1);
        assert!((200..=1023).contains(&config.core_settings.high_level.value));
        assert!(config.core_settings.gain.value <= 8);
        assert_eq!(config.recommendations.general.len(), 4);
        assert_eq!(config.recommendations.setup.len(), 5);
    }
    println!("✅ 200 captures");
}

// ============================================================================
// Capture I/O Integration Tests
// ============================================================================

/// Test: Capture files round trip through every supported format
#[test]
fn test_capture_io_formats() {
    println!("💾 Testing capture I/O:");

    let strike = synthetic_strike(48000);

    // WAV keeps the exact bytes and the header rate
    let wav = temp_path("strike.wav");
    save_capture(&wav, &strike).unwrap();
    let loaded = load_capture(&wav, None).unwrap();
    assert_eq!(loaded, strike);
    let _ = std::fs::remove_file(&wav);
    println!("   WAV: ✅");

    // Raw dumps take the rate from the caller
    let raw = temp_path("strike.bin");
    save_raw(&raw, &strike).unwrap();
    let loaded = load_capture(&raw, Some(48000)).unwrap();
    assert_eq!(loaded, strike);
    let _ = std::fs::remove_file(&raw);
    println!("   Raw: ✅");

    // JSON with an embedded rate
    let json = temp_path("strike.json");
    let body = serde_json::json!({ "sample_rate": 48000, "samples": strike.samples });
    std::fs::write(&json, body.to_string()).unwrap();
    let loaded = load_capture(&json, None).unwrap();
    assert_eq!(loaded, strike);
    let _ = std::fs::remove_file(&json);
    println!("   JSON: ✅");
}

/// Test: Tuning a JSON capture honours the rate stored in the file
#[test]
fn test_tune_json_capture_keeps_embedded_rate() {
    println!("⏱️ Testing embedded JSON sample rate:");

    let path = temp_path("embedded_rate.json");
    let strike = synthetic_strike(8000);
    let body = serde_json::json!({ "sample_rate": 8000, "samples": strike.samples });
    std::fs::write(&path, body.to_string()).unwrap();

    let tuner = Tuner::new(Config::default()).unwrap();
    let outcome = tuner.tune_file(&path, None, None).unwrap().unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(outcome.analysis.sample_rate, 8000);
    // 45 samples at 8 kHz is 5.6ms, still under the fast-decay band
    assert!((outcome.analysis.decay_ms() - 5.625).abs() < 1e-3);
    println!("✅ {} Hz", outcome.analysis.sample_rate);
}

/// Test: NaN in a float WAV is rejected instead of read as full scale
#[test]
fn test_float_wav_with_nan_is_rejected() {
    println!("🚫 Testing float WAV with NaN:");

    let path = temp_path("nan_float.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for sample in [0.0f32, f32::NAN, 0.0] {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();

    let tuner = Tuner::new(Config::default()).unwrap();
    let result = tuner.tune_file(&path, None, None);
    let _ = std::fs::remove_file(&path);

    assert!(matches!(result, Err(Error::InvalidFormat(_))));
    println!("✅ Correctly rejected");
}

/// Test: 16-bit stereo WAV is mixed down and quantized
#[test]
fn test_wide_wav_is_quantized() {
    println!("🎚️ Testing 16-bit stereo WAV:");

    let path = temp_path("stereo16.wav");
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for frame in [(0i16, 0i16), (16384, 16384), (-32768, -32768), (16384, -16384)] {
        writer.write_sample(frame.0).unwrap();
        writer.write_sample(frame.1).unwrap();
    }
    writer.finalize().unwrap();

    let loaded = load_capture(&path, None).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.sample_rate, 44100);
    assert_eq!(loaded.samples, vec![128, 192, 0, 128]);
    println!("✅ {:?}", loaded.samples);
}

/// Test: Batch tuning keeps input order and isolates failures
#[test]
fn test_batch_tuning() {
    println!("📦 Testing batch tuning:");

    let clean = temp_path("batch_clean.wav");
    let bouncy = temp_path("batch_bouncy.raw");
    let empty = temp_path("batch_empty.raw");
    let missing = temp_path("batch_missing.wav");

    save_capture(&clean, &synthetic_strike(44100)).unwrap();
    save_raw(&bouncy, &bouncing_strike(5, 44100)).unwrap();
    std::fs::write(&empty, b"").unwrap();

    let paths = vec![clean.clone(), bouncy.clone(), empty.clone(), missing];
    let tuner = Tuner::new(Config::default()).unwrap();
    let results = tuner.tune_batch(&paths, None);

    let loaded = load_capture_batch(&paths[..2], None);
    assert!(loaded.iter().all(|r| r.is_ok()));

    for path in [&clean, &bouncy, &empty] {
        let _ = std::fs::remove_file(path);
    }

    assert_eq!(results.len(), 4);
    let first = results[0].as_ref().unwrap().as_ref().unwrap();
    assert_eq!(first.analysis.peaks.len(), 1);
    let second = results[1].as_ref().unwrap().as_ref().unwrap();
    assert_eq!(second.config.timing_settings.retrigger.value, 20);
    assert!(results[2].as_ref().unwrap().is_none());
    assert!(matches!(results[3], Err(Error::FileNotFound(_))));
    println!("✅ 4 results in order");
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test: Configuration round trip and its effect on tuning
#[test]
fn test_config_handling() {
    println!("⚙️ Testing configuration:");

    let mut config = Config::default();
    config.analysis.peak_threshold = 0.2;
    config.synthesis.pad_type = Some(PadType::GenericPad);
    config.report.format = OutputFormat::Json;

    let path = temp_path("config.yaml");
    config.save(&path).unwrap();
    let yaml = std::fs::read_to_string(&path).unwrap();
    assert!(yaml.contains("Generic Pad"));

    let loaded = Config::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, config);

    let tuner = Tuner::new(loaded).unwrap();
    let outcome = tuner.tune(&synthetic_strike(44100), None).unwrap().unwrap();
    assert_eq!(outcome.config.pad_type, PadType::GenericPad);
    assert_eq!(outcome.config.detected_type, PadType::Cymbal);

    let json = outcome.render(OutputFormat::Json, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["config"]["padType"], "Generic Pad");
    println!("✅ OK");
}

/// Test: Partial YAML fills the remaining fields with defaults
#[test]
fn test_partial_config() {
    println!("🧩 Testing partial configuration:");

    let path = temp_path("partial.yaml");
    std::fs::write(&path, "analysis:\n  sample_rate: 48000\n").unwrap();
    let loaded = Config::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded.analysis.sample_rate, 48000);
    assert_eq!(loaded.analysis.peak_threshold, 0.3);
    assert!(loaded.report.include_analysis);
    assert_eq!(loaded.synthesis.pad_type, None);
    println!("✅ OK");
}

// ============================================================================
// Error Handling Tests
// ============================================================================

/// Test: Error handling for bad inputs
#[test]
fn test_error_handling() {
    println!("🚫 Testing error handling:");

    let tuner = Tuner::new(Config::default()).unwrap();

    // Missing capture
    let missing = temp_path("nope.raw");
    assert!(matches!(
        tuner.tune_file(&missing, None, None),
        Err(Error::FileNotFound(_))
    ));

    // Unsupported extension
    assert!(matches!(
        tuner.tune_file("strike.mp3", None, None),
        Err(Error::InvalidFormat(_))
    ));

    // Unknown pad type override
    assert!(matches!(
        PadType::parse_override(Some("cowbell")),
        Err(Error::UnknownPadType(_))
    ));

    // Zero sample rate
    assert!(matches!(
        SampleBuffer::new(vec![128, 250, 128], 0).analyze(),
        Err(Error::Analysis(_))
    ));

    // Invalid configuration file
    let path = temp_path("bad.yaml");
    std::fs::write(&path, "analysis:\n  envelope_fraction: 2.0\n").unwrap();
    let result = Config::load(&path);
    let _ = std::fs::remove_file(&path);
    assert!(matches!(result, Err(Error::Config(_))));

    // Missing configuration file
    assert!(matches!(
        Config::load(temp_path("nope.yaml")),
        Err(Error::FileNotFound(_))
    ));
    println!("✅ Correctly rejected");
}

// ============================================================================
// Performance Sanity Tests
// ============================================================================

/// Test: Tuning a strike is fast enough for interactive use
#[test]
fn test_performance_sanity() {
    println!("⚡ Testing performance sanity:");

    let tuner = Tuner::new(Config::default()).unwrap();
    let strike = synthetic_strike(44100);

    let start = std::time::Instant::now();
    for _ in 0..100 {
        let _ = tuner.tune(&strike, None).unwrap();
    }
    let elapsed = start.elapsed();

    assert!(elapsed.as_secs_f64() < 5.0);
    println!("✅ {:.2}ms for 100 strikes", elapsed.as_secs_f64() * 1000.0);
}
