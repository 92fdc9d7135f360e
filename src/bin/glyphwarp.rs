use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use glyphwarp::{
    CaptureFormat, Canvas, Config, CpuRenderer, CursorScript, DirOutlineSource, FfmpegSink,
    FfmpegSinkOpts, FrameSink, Simulation, export_png, is_ffmpeg_on_path, run_frames,
    timestamped_file_name, write_svg,
};

#[derive(Parser, Debug)]
#[command(name = "glyphwarp", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the simulation headless and export the last frame as PNG or SVG.
    Frame(FrameArgs),
    /// Record the simulation to a video (requires `ffmpeg` on PATH).
    Record(RecordArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Directory holding `<letter>.svg` outlines.
    #[arg(long)]
    outlines: PathBuf,

    /// Config JSON (camelCase keys); defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Letter to draw, overriding the config.
    #[arg(long)]
    letter: Option<String>,

    /// Cursor script JSON (`[{"frame":0,"x":..,"y":..}, ...]`); a sweep is used when omitted.
    #[arg(long)]
    cursor: Option<PathBuf>,

    /// Particle intensity, overriding the config.
    #[arg(long)]
    particles: Option<f64>,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Seed for particle placement.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Png,
    Svg,
}

impl From<Format> for CaptureFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Png => CaptureFormat::Png,
            Format::Svg => CaptureFormat::Svg,
        }
    }
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Output path; `made-in-<letter>-<millis>.<ext>` in the current directory when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RecordArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output path; the extension follows the codec actually used (mp4 or webm).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Record(args) => cmd_record(args),
    }
}

fn build_simulation(scene: &SceneArgs) -> anyhow::Result<(Simulation, CursorScript)> {
    let mut config = match &scene.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    if let Some(letter) = &scene.letter {
        config.set_letter(letter)?;
    }

    let canvas = Canvas::new(scene.width, scene.height)?;
    let mut sim = match scene.seed {
        Some(seed) => Simulation::with_seed(canvas, config, seed)?,
        None => Simulation::new(canvas, config)?,
    };

    let source = DirOutlineSource::new(&scene.outlines);
    if let Err(e) = sim.load_outline(&source) {
        tracing::warn!(error = %e, "continuing without a letter");
    }
    if let Some(intensity) = scene.particles {
        sim.set_particle_intensity(intensity)?;
    }

    let script = match &scene.cursor {
        Some(path) => CursorScript::from_path(path)?,
        None => CursorScript::sweep(canvas, scene.frames),
    };
    Ok((sim, script))
}

fn out_path(out: Option<PathBuf>, letter: &str, ext: &str) -> PathBuf {
    out.unwrap_or_else(|| PathBuf::from(timestamped_file_name(letter, ext)))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (mut sim, script) = build_simulation(&args.scene)?;
    let format = CaptureFormat::from(args.format);
    let frames = u32::try_from(args.scene.frames).context("--frames is too large")?;
    sim.request_capture(format, frames);

    let mut renderer = CpuRenderer::new();
    let outcome = run_frames(&mut sim, &script, args.scene.frames, &mut renderer, None)?;
    let frame = outcome.captures.last().unwrap_or(&outcome.last);

    let out = out_path(args.out, sim.config().letter(), format.extension());
    match format {
        CaptureFormat::Png => {
            export_png(&mut renderer, &out, frame)?;
        }
        CaptureFormat::Svg => write_svg(&out, frame)?,
    }

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_record(args: RecordArgs) -> anyhow::Result<()> {
    if !is_ffmpeg_on_path() {
        tracing::warn!("ffmpeg not found on PATH; recording skipped");
        return Ok(());
    }

    let (mut sim, script) = build_simulation(&args.scene)?;
    let out = out_path(args.out, sim.config().letter(), "mp4");
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
    let mut renderer = CpuRenderer::new();
    run_frames(
        &mut sim,
        &script,
        args.scene.frames,
        &mut renderer,
        Some(&mut sink as &mut dyn FrameSink),
    )
    .with_context(|| format!("record '{}'", out.display()))?;

    let written = sink.output_path().unwrap_or(Path::new(&out));
    eprintln!("wrote {}", written.display());
    Ok(())
}
