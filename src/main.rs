//! trigger-tune CLI
//!
//! Command-line interface for drum-strike analysis and trigger configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use trigger_tune::{
    audio::{save_capture, synthetic_strike, StrikeShape},
    report::{render, OutputFormat},
    AnalysisConfig, Config, Curve, PadType, Result, Tuner,
};

#[derive(Parser)]
#[command(
    name = "trigger-tune",
    about = "Analyze a captured drum strike and synthesize trigger settings",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one capture and print its trigger configuration
    Analyze {
        /// Capture file (.raw, .bin, .u8, .json or .wav)
        #[arg(short, long)]
        input: PathBuf,

        /// Sample rate for raw and JSON captures
        #[arg(short, long)]
        sample_rate: Option<u32>,

        /// Optimize for this pad type instead of the detected one
        #[arg(short, long)]
        pad_type: Option<String>,

        /// Output format (text, json, yaml)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave the analysis summary out of text reports
        #[arg(long)]
        no_analysis: bool,
    },

    /// Analyze several captures in parallel
    Batch {
        /// Capture files
        #[arg(short, long, num_args = 1.., required = true)]
        inputs: Vec<PathBuf>,

        /// Sample rate for raw and JSON captures
        #[arg(short, long)]
        sample_rate: Option<u32>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a synthetic strike capture
    SynthStrike {
        /// Output WAV path
        #[arg(short, long, default_value = "strike.wav")]
        output: PathBuf,

        /// Total samples
        #[arg(long, default_value = "2048")]
        length: usize,

        /// Index of the spike
        #[arg(long, default_value = "1024")]
        peak_index: usize,

        /// Raw spike value (128 = silence)
        #[arg(long, default_value = "250")]
        peak: u8,

        /// Decay length in samples
        #[arg(long, default_value = "50")]
        decay: usize,

        /// Sample rate
        #[arg(long, default_value = "44100")]
        sample_rate: u32,
    },

    /// Generate default configuration file
    InitConfig {
        /// Output path for config file
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },

    /// Show information about the system
    Info,

    /// Run benchmarks
    Benchmark {
        /// Number of iterations
        #[arg(short, long, default_value = "1000")]
        iterations: usize,
    },
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            sample_rate,
            pad_type,
            format,
            config,
            output,
            no_analysis,
        } => {
            log::info!("Trigger Analysis");
            log::info!("================");

            let cfg = load_config(config)?;
            let format = format.unwrap_or(cfg.report.format);
            let include_analysis = cfg.report.include_analysis && !no_analysis;
            let pad_type = PadType::parse_override(pad_type.as_deref())?;

            let tuner = Tuner::new(cfg)?;

            log::info!("Input: {}", input.display());
            let outcome = tuner.tune_file(&input, sample_rate, pad_type)?;

            let text = match &outcome {
                Some(outcome) => {
                    let quality = outcome.analysis.quality;
                    log::info!("Signal quality: {} ({})", quality, quality.description());
                    if outcome.config.is_overridden() {
                        log::info!(
                            "Optimizing for {} (detected {})",
                            outcome.config.pad_type,
                            outcome.config.detected_type
                        );
                    }
                    log::info!("Processing time: {:.3}ms", outcome.processing_time * 1000.0);
                    outcome.render(format, include_analysis)?
                }
                None => render(format, None, include_analysis)?,
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, text)?;
                    println!("✓ Report saved to: {}", path.display());
                }
                None => println!("{}", text),
            }
        }

        Commands::Batch {
            inputs,
            sample_rate,
            config,
        } => {
            log::info!("Batch Analysis ({} captures)", inputs.len());
            log::info!("================================");

            let tuner = Tuner::new(load_config(config)?)?;
            let start = Instant::now();
            let results = tuner.tune_batch(&inputs, sample_rate);

            let mut failed = 0;
            for (path, result) in inputs.iter().zip(results) {
                match result {
                    Ok(Some(outcome)) => log::info!("{}: {}", path.display(), outcome.summary()),
                    Ok(None) => log::info!("{}: empty capture", path.display()),
                    Err(e) => {
                        failed += 1;
                        log::error!("{}: {}", path.display(), e);
                    }
                }
            }

            log::info!(
                "Processed {} captures in {:.2}s",
                inputs.len(),
                start.elapsed().as_secs_f32()
            );
            if failed > 0 {
                log::warn!("{} captures failed", failed);
            }
            println!("✓ Batch complete");
        }

        Commands::SynthStrike {
            output,
            length,
            peak_index,
            peak,
            decay,
            sample_rate,
        } => {
            let shape = StrikeShape {
                length,
                peak_index,
                peak_value: peak,
                decay_samples: decay,
            };
            let buffer = shape.render(sample_rate);
            save_capture(&output, &buffer)?;

            log::info!(
                "{} samples at {} Hz ({:.1}ms)",
                buffer.len(),
                sample_rate,
                buffer.duration() * 1000.0
            );
            println!("✓ Synthetic strike saved to: {}", output.display());
        }

        Commands::InitConfig { output } => {
            log::info!("Creating default configuration...");

            Config::create_default(&output)?;

            println!("✓ Configuration saved to: {}", output.display());
        }

        Commands::Info => {
            let analysis = AnalysisConfig::default();

            println!("trigger-tune - Drum Trigger Configuration");
            println!("=========================================");
            println!("Version: {}", trigger_tune::VERSION);
            println!("Analysis engine: {}", trigger_tune::analysis::VERSION);
            println!("Platform: {}", std::env::consts::OS);
            println!("Architecture: {}", std::env::consts::ARCH);
            println!();
            println!("Capture formats: raw 8-bit (.raw, .bin, .u8), JSON, WAV");
            println!("Report formats: text, json, yaml");
            println!(
                "Pad types: {}",
                PadType::ALL.map(|p| p.name()).join(", ")
            );
            println!("Curves: {}", Curve::ALL.map(|c| c.name()).join(", "));
            println!();
            println!("Sample Rate: {} Hz", analysis.sample_rate);
            println!("Peak Threshold: {}", analysis.peak_threshold);
            println!("Envelope Fraction: {}", analysis.envelope_fraction);
            println!("Noise Floor Fraction: {}", analysis.noise_floor_fraction);
            println!();
            println!("CPU Cores: {}", num_cpus::get());
            println!("Physical Cores: {}", num_cpus::get_physical());
        }

        Commands::Benchmark { iterations } => {
            log::info!("Running benchmarks ({} iterations)...", iterations);

            benchmark_tuning(iterations.max(1))?;

            println!("✓ Benchmarks complete");
        }
    }

    Ok(())
}

fn benchmark_tuning(iterations: usize) -> Result<()> {
    println!("\nStrike Tuning Benchmark");
    println!("-----------------------");

    let tuner = Tuner::new(Config::default())?;
    let strike = synthetic_strike(trigger_tune::SAMPLE_RATE);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = tuner.tune(&strike, None)?;
    }
    let elapsed = start.elapsed();

    let per_iter = elapsed.as_secs_f32() / iterations as f32;
    println!(
        "  Capture length: {} samples ({:.1}ms)",
        strike.len(),
        strike.duration() * 1000.0
    );
    println!("  Iterations: {}", iterations);
    println!("  Total time: {:.3}s", elapsed.as_secs_f32());
    println!("  Per iteration: {:.3}µs", per_iter * 1_000_000.0);
    println!("  Throughput: {:.0} strikes/sec", 1.0 / per_iter.max(f32::EPSILON));
    Ok(())
}
