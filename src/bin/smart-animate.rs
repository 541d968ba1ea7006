use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::Serialize;
use smart_animate::{
    EngineKind, Morph, MorphConfig, PlaybackDriver, Scene, TrackSample, match_shapes,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "smart-animate", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the shape correspondence between two scenes as JSON.
    Match(MatchArgs),
    /// Print every track's state at one progress value as JSON.
    Sample(SampleArgs),
    /// Step the whole transition at a frame rate, one JSON line per frame.
    Frames(FramesArgs),
}

#[derive(Parser, Debug)]
struct MatchArgs {
    /// Start scene JSON.
    #[arg(long)]
    start: PathBuf,

    /// End scene JSON.
    #[arg(long)]
    end: PathBuf,

    /// Morph config JSON; only `match_weights` is used.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct MorphInput {
    /// Start scene JSON. Omit to animate the end scene in.
    #[arg(long)]
    start: Option<PathBuf>,

    /// End scene JSON.
    #[arg(long)]
    end: PathBuf,

    /// Morph config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    input: MorphInput,

    /// Global progress in [0, 1].
    #[arg(long, default_value_t = 0.5)]
    progress: f64,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    input: MorphInput,

    /// Frames per second.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Match(args) => cmd_match(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn load_scene(path: &Path) -> anyhow::Result<Scene> {
    Scene::from_path(path).with_context(|| format!("load scene '{}'", path.display()))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<MorphConfig> {
    match path {
        Some(p) => {
            MorphConfig::from_path(p).with_context(|| format!("load config '{}'", p.display()))
        }
        None => Ok(MorphConfig::default()),
    }
}

fn load_morph(input: &MorphInput) -> anyhow::Result<Morph> {
    let config = load_config(input.config.as_deref())?;
    let end = load_scene(&input.end)?;
    let start = input.start.as_deref().map(load_scene).transpose()?;
    Ok(smart_animate::build_morph(
        start.as_ref().map(|s| s.shapes.as_slice()),
        &end.shapes,
        &config,
    ))
}

fn cmd_match(args: MatchArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let start = load_scene(&args.start)?;
    let end = load_scene(&args.end)?;
    let result = match_shapes(&start.shapes, &end.shapes, &config.match_weights);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &result).context("write correspondence")?;
    writeln!(out)?;
    Ok(())
}

#[derive(Serialize)]
struct EngineCount {
    engine: EngineKind,
    tracks: usize,
}

#[derive(Serialize)]
struct SampleReport {
    progress: f64,
    total_ms: f64,
    engines: Vec<EngineCount>,
    tracks: Vec<TrackSample>,
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    if !args.progress.is_finite() {
        anyhow::bail!("progress must be a finite number (got {})", args.progress);
    }
    let morph = load_morph(&args.input)?;
    let report = SampleReport {
        progress: args.progress,
        total_ms: morph.total_duration_ms(),
        engines: morph
            .engine_counts()
            .into_iter()
            .map(|(engine, tracks)| EngineCount { engine, tracks })
            .collect(),
        tracks: morph.sample(args.progress),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &report).context("write samples")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let morph = load_morph(&args.input)?;
    let mut driver = PlaybackDriver::new(morph);

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let file = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut sink = smart_animate::JsonLinesSink::new(BufWriter::new(file));
            let frames = driver
                .render_offline(&mut sink, args.fps)
                .with_context(|| format!("write frames '{}'", path.display()))?;
            eprintln!("wrote {} ({frames} frames)", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut sink = smart_animate::JsonLinesSink::new(stdout.lock());
            driver
                .render_offline(&mut sink, args.fps)
                .context("write frames")?;
        }
    }
    Ok(())
}
