use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use wavefolio::{
    FrameTime, Rng64, WaveAnimator, WaveConfig, generate_wave_specs,
    host::sim::{SimDocument, SimHost, SimMotion},
};

#[derive(Parser, Debug)]
#[command(name = "wavefolio", version)]
struct Cli {
    /// Log lifecycle events to stderr (repeat for per-frame traces).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print generated wave specs as JSON.
    Specs(SpecsArgs),
    /// Run the animator on a simulated host and print each written transform.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct SpecsArgs {
    /// Number of wave elements.
    #[arg(long, default_value_t = 4)]
    waves: usize,

    /// RNG seed (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Optional JSON config overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    /// Number of wave elements.
    #[arg(long, default_value_t = 4)]
    waves: usize,

    /// RNG seed (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to run.
    #[arg(long, default_value_t = 3)]
    frames: u32,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Scroll offset applied before the first frame.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Report a reduced-motion preference.
    #[arg(long)]
    reduced_motion: bool,

    /// Reported viewport width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f64,

    /// Optional JSON config overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Specs(args) => cmd_specs(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<WaveConfig> {
    match path {
        Some(p) => WaveConfig::load(p).with_context(|| format!("load config '{}'", p.display())),
        None => Ok(WaveConfig::default()),
    }
}

fn make_rng(seed: Option<u64>) -> Rng64 {
    seed.map(Rng64::new).unwrap_or_else(Rng64::from_entropy)
}

fn cmd_specs(args: SpecsArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let mut rng = make_rng(args.seed);
    let specs = generate_wave_specs(&mut rng, args.waves, &cfg);
    let json = serde_json::to_string_pretty(&specs).context("serialize specs")?;
    println!("{json}");
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.fps.is_finite() && args.fps > 0.0,
        "--fps must be a positive number"
    );
    let cfg = load_config(args.config.as_deref())?;
    let animator = WaveAnimator::new(cfg)?;

    let host = SimHost::new(SimMotion {
        prefers_reduced: args.reduced_motion,
        viewport_width: args.viewport_width,
    });
    let doc = SimDocument::with_waves(args.waves);
    let mut rng = make_rng(args.seed);

    let Some(handle) = animator.start(&doc, &host.services(), &mut rng)? else {
        eprintln!("no wave elements; nothing to animate");
        return Ok(());
    };
    if args.scroll != 0.0 {
        host.scroll.scroll_to(args.scroll);
    }

    let dt_ms = 1000.0 / args.fps;
    for frame in 0..args.frames {
        host.scheduler
            .run_frame(FrameTime::from_millis(f64::from(frame) * dt_ms));
        for (i, el) in doc.elements.iter().enumerate() {
            if let Some(attr) = el.last() {
                println!("frame {frame} wave {i}: {attr}");
            }
        }
    }

    handle.cancel();
    eprintln!(
        "rendered {} frames, parallax {:.2}, reduced motion {}",
        handle.frames_rendered(),
        handle.state().scroll_parallax_y(),
        handle.state().reduced_motion()
    );
    Ok(())
}
