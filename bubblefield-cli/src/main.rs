use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bubblefield", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a media directory into web-friendly formats (uses `ffmpeg`
    /// on PATH for HEIC and video work).
    Convert(ConvertArgs),
    /// Run the bubble engine headless and dump snapshots as JSON lines.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Media directory to scan.
    #[arg(long, default_value = "public/photos")]
    dir: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input manifest JSON (media list, engine config, viewport, seed).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSONL path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Simulated duration in milliseconds.
    #[arg(long, default_value_t = 30_000)]
    duration_ms: u64,

    /// Tick interval in milliseconds.
    #[arg(long, default_value_t = 250)]
    step_ms: u64,
}

/// Simulate input: the same data the hosting page hands the engine at mount.
#[derive(serde::Deserialize, Debug)]
struct Manifest {
    media: Vec<bubblefield::MediaItem>,
    #[serde(default)]
    config: bubblefield::EngineConfig,
    viewport: bubblefield::Viewport,
    #[serde(default)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    if !bubblefield::is_ffmpeg_on_path() {
        eprintln!("warning: ffmpeg not found on PATH; HEIC and video files will fail");
    }

    let summary = bubblefield::run_batch(&args.dir)?;
    if summary.reports.is_empty() {
        println!("No files found in {}", args.dir.display());
        return Ok(());
    }

    println!("\nConversion summary:");
    for report in &summary.reports {
        match &report.outcome {
            bubblefield::Outcome::Skipped { reason } => {
                println!("- {} → skip ({reason})", report.file)
            }
            bubblefield::Outcome::Converted { outputs } => {
                println!("- {} → converted {}", report.file, outputs.join(", "))
            }
            bubblefield::Outcome::Failed { reason } => {
                println!("- {} → failed ({reason})", report.file)
            }
        }
    }
    println!(
        "\nDone: {} converted, {} skipped, {} failed.",
        summary.converted_count(),
        summary.skipped_count(),
        summary.failed_count()
    );
    println!("Tip: point your media list at the converted .webp/.mp4 files for best browser support.");

    if summary.failed_count() > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read manifest '{}'", args.in_path.display()))?;
    let manifest: Manifest = serde_json::from_str(&raw)
        .with_context(|| format!("parse manifest '{}'", args.in_path.display()))?;
    let media_root = args
        .in_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let mut engine = bubblefield::BubbleEngine::new(
        manifest.config,
        manifest.media,
        manifest.viewport,
        manifest.seed,
        bubblefield::Millis(0),
    )?;

    let mut sink: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            Box::new(std::io::BufWriter::new(
                std::fs::File::create(path)
                    .with_context(|| format!("create '{}'", path.display()))?,
            ))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    let mut probed: HashMap<String, Option<u64>> = HashMap::new();
    let mut t = 0u64;
    loop {
        let now = bubblefield::Millis(t);
        engine.tick(now);
        feed_video_durations(&mut engine, &media_root, &mut probed, now);

        let line = serde_json::json!({ "t": t, "snapshot": engine.snapshot() });
        serde_json::to_writer(&mut sink, &line)?;
        sink.write_all(b"\n")?;

        if t >= args.duration_ms {
            break;
        }
        t += args.step_ms.max(1);
    }
    engine.shutdown();
    sink.flush()?;

    if let Some(path) = &args.out {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

/// Stand-in for the playback layer's metadata notifications: probe each
/// video bubble's source with ffprobe (once per source) and report the
/// duration back to the engine. Unresolvable sources simply never expire,
/// like a video that never loads.
fn feed_video_durations(
    engine: &mut bubblefield::BubbleEngine,
    media_root: &Path,
    probed: &mut HashMap<String, Option<u64>>,
    now: bubblefield::Millis,
) {
    let pending: Vec<(bubblefield::BubbleId, String)> = engine
        .bubbles()
        .iter()
        .filter(|b| b.is_video() && b.lifespan_ms.is_none() && !b.popping)
        .map(|b| (b.id, b.media.source.clone()))
        .collect();

    for (id, source) in pending {
        let duration = probed
            .entry(source.clone())
            .or_insert_with(|| {
                let path = media_root.join(&source);
                match bubblefield::probe_media_duration(&path) {
                    Ok(ms) => Some(ms),
                    Err(e) => {
                        tracing::debug!(source = %source, error = %e, "duration probe failed");
                        None
                    }
                }
            })
            .to_owned();
        if let Some(ms) = duration {
            engine.media_duration_known(id, ms, now);
        }
    }
}
