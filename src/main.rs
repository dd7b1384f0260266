//! Simulated tracking session for tuning the parallax pipeline.

use anyhow::Result;
use clap::Parser;
use log::info;
use parallax_window::{
    config::Config,
    session::TrackingSession,
    source::{PointerSource, ScriptedSource},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of frames to simulate
    #[arg(short = 'n', long, default_value = "300")]
    frames: u32,

    /// Simulated head motion amplitude (normalized)
    #[arg(short, long, default_value = "0.6")]
    amplitude: f64,

    /// Simulated head motion period, in frames
    #[arg(short, long, default_value = "180")]
    period: f64,

    /// First frame of a simulated detection dropout
    #[arg(long)]
    dropout_at: Option<u64>,

    /// Length of the simulated dropout, in frames
    #[arg(long, default_value = "30")]
    dropout_frames: u64,

    /// Override the configured parallax sensitivity
    #[arg(short, long)]
    sensitivity: Option<f64>,

    /// Start on the pointer fallback path instead of the detector
    #[arg(long)]
    fallback: bool,

    /// Simulate a detector that fails to acquire its capture device
    #[arg(long)]
    broken_detector: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Parallax window pipeline simulation");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {config_path}");
        Config::from_file(config_path)?
    } else {
        Config::default()
    };
    if args.fallback {
        config.confidence.initial_mode = "fallback".to_string();
    }
    if let Some(sensitivity) = args.sensitivity {
        config.mapper.sensitivity = sensitivity;
    }
    config.validate()?;

    let mut detector = ScriptedSource::new(args.amplitude, args.period);
    if let Some(start) = args.dropout_at {
        detector = detector.with_dropout(start..start + args.dropout_frames);
    }
    if args.broken_detector {
        detector = detector.with_failing_init();
    }

    let mut session = TrackingSession::new(
        config.create_mapper(),
        config.create_tracker()?,
        PointerSource::new(1920.0, 1080.0)?,
        Some(Box::new(detector)),
    );

    session.start();

    let frame_interval = 1.0 / config.filter.frequency;
    for i in 0..args.frames {
        let out = session.tick(Some(f64::from(i) * frame_interval))?;
        let (shift_x, shift_y) = out
            .frame
            .frustum
            .map_or((0.0, 0.0), |f| (f.shift_x(), f.shift_y()));
        println!(
            "frame {i:4}  mode {:?}  score {:5.1}{}  camera ({:+.4}, {:+.4})  frustum ({:+.4}, {:+.4})",
            out.mode,
            out.score,
            if out.low_confidence { " LOW" } else { "" },
            out.frame.camera.x,
            out.frame.camera.y,
            shift_x,
            shift_y,
        );
    }

    session.stop();

    Ok(())
}
