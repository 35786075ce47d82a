use std::{
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context as _, bail};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hijama-fx", version)]
struct Cli {
    /// Optional JSON configuration (wave, intro, carousel, palette).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the foam and body path data for one wave frame.
    Wave(WaveArgs),
    /// Render one preloader frame as a PNG.
    Frame(FrameArgs),
    /// Simulate the whole intro; print frames as JSON lines or write a PNG sequence.
    Intro(IntroArgs),
    /// Replay a navigation script against the carousel and print each resulting view.
    Carousel(CarouselArgs),
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// Progress in [0, 1].
    #[arg(long)]
    progress: f64,

    /// Oscillation phase; defaults to the current wall clock divided by the wave period.
    #[arg(long, conflicts_with = "wall_ms")]
    time: Option<f64>,

    /// Wall-clock milliseconds to derive the phase from.
    #[arg(long)]
    wall_ms: Option<f64>,
}

#[derive(Args, Debug)]
struct WaveArgs {
    #[command(flatten)]
    sample: SampleArgs,

    /// Print a JSON object instead of two path lines.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    sample: SampleArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Edge length in pixels.
    #[arg(long, default_value_t = 256)]
    size: u32,
}

#[derive(Args, Debug)]
struct IntroArgs {
    /// Simulated frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Write `frame_NNNNN.png` files here instead of printing JSON lines.
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Edge length in pixels of written frames.
    #[arg(long, default_value_t = 256)]
    size: u32,

    /// Render frames in parallel.
    #[arg(long)]
    parallel: bool,

    /// Worker thread count for --parallel.
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Args, Debug)]
struct CarouselArgs {
    /// Number of equal-width items.
    #[arg(long, conflicts_with = "widths")]
    items: Option<usize>,

    /// Comma-separated item widths in pixels.
    #[arg(long, value_delimiter = ',')]
    widths: Option<Vec<f64>>,

    /// Width of each item when using --items.
    #[arg(long, default_value_t = 320.0)]
    item_width: f64,

    /// Gap between items.
    #[arg(long, default_value_t = 24.0)]
    gap: f64,

    /// Initial window width in pixels.
    #[arg(long, default_value_t = 1280)]
    width_px: u32,

    /// Script file with one command per line; `-` or absent reads stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => hijama_fx::FxConfig::load(path)?,
        None => hijama_fx::FxConfig::default(),
    };

    match cli.cmd {
        Command::Wave(args) => cmd_wave(&cfg, args),
        Command::Frame(args) => cmd_frame(&cfg, args),
        Command::Intro(args) => cmd_intro(&cfg, args),
        Command::Carousel(args) => cmd_carousel(&cfg, args),
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

fn sample_frame(cfg: &hijama_fx::FxConfig, s: &SampleArgs) -> anyhow::Result<hijama_fx::WaveFrame> {
    if !(0.0..=1.0).contains(&s.progress) {
        bail!("--progress must be within [0, 1], got {}", s.progress);
    }
    let renderer = hijama_fx::WaveRenderer::new(cfg.wave);
    let time = match (s.time, s.wall_ms) {
        (Some(t), _) => t,
        (None, Some(ms)) => cfg.wave.phase_at(ms),
        (None, None) => {
            use hijama_fx::Clock as _;
            cfg.wave.phase_at(hijama_fx::WallClock.now_ms())
        }
    };
    Ok(renderer.frame(s.progress, time))
}

fn cmd_wave(cfg: &hijama_fx::FxConfig, args: WaveArgs) -> anyhow::Result<()> {
    let frame = sample_frame(cfg, &args.sample)?;
    let mut stdout = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &frame.summary())
            .context("write wave json")?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", frame.foam_svg())?;
        writeln!(stdout, "{}", frame.body_svg())?;
    }
    Ok(())
}

fn cmd_frame(cfg: &hijama_fx::FxConfig, args: FrameArgs) -> anyhow::Result<()> {
    let frame = sample_frame(cfg, &args.sample)?;
    let doc = hijama_fx::wave_svg_document(&frame, &cfg.palette, args.size);
    let raster = hijama_fx::rasterize_svg(&doc, args.size, args.size)?;
    hijama_fx::write_png(&raster, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

#[derive(serde::Serialize)]
struct IntroLine<'a> {
    index: u64,
    timestamp_ms: f64,
    progress: f64,
    counter: u32,
    foam_base: f64,
    outro: Option<&'a hijama_fx::OutroFrame>,
}

fn cmd_intro(cfg: &hijama_fx::FxConfig, args: IntroArgs) -> anyhow::Result<()> {
    let fps = hijama_fx::Fps::new(args.fps, 1)?;
    let wall_start = {
        use hijama_fx::Clock as _;
        hijama_fx::WallClock.now_ms()
    };
    let frames = hijama_fx::plan_intro(cfg, fps, wall_start)?;

    let Some(dir) = args.out_dir else {
        let mut stdout = std::io::stdout().lock();
        for f in &frames {
            let line = IntroLine {
                index: f.index,
                timestamp_ms: f.timestamp_ms,
                progress: f.intro.progress,
                counter: f.intro.counter,
                foam_base: f.intro.wave.foam_base,
                outro: f.outro.as_ref(),
            };
            serde_json::to_writer(&mut stdout, &line).context("write intro json")?;
            writeln!(stdout)?;
        }
        return Ok(());
    };

    let opts = hijama_fx::SequenceOpts {
        size_px: args.size,
        parallel: args.parallel,
        threads: args.threads,
    };
    let rasters = hijama_fx::render_sequence(cfg, &frames, &opts)?;
    for (f, raster) in frames.iter().zip(&rasters) {
        let path = dir.join(format!("frame_{:05}.png", f.index));
        hijama_fx::write_png(raster, &path)?;
    }
    eprintln!("wrote {} frames to {}", rasters.len(), dir.display());
    Ok(())
}

/// One line of a carousel script.
#[derive(Debug, PartialEq)]
enum ScriptEvent {
    Resize(u32),
    Input(hijama_fx::Input),
}

fn parse_script_line(line: &str) -> anyhow::Result<Option<ScriptEvent>> {
    use hijama_fx::{Control, Focus, Input, Key};

    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or("");
    let event = match (head, words.next(), words.next()) {
        ("next", None, None) => ScriptEvent::Input(Input::Click(Control::Next)),
        ("prev" | "previous", None, None) => ScriptEvent::Input(Input::Click(Control::Previous)),
        ("resize", Some(w), None) => {
            let w = w
                .parse::<u32>()
                .with_context(|| format!("invalid resize width '{w}'"))?;
            ScriptEvent::Resize(w)
        }
        ("key", Some(target), Some(key)) => {
            let focus = match target {
                "region" => Focus::Region,
                "next" => Focus::Control(Control::Next),
                "prev" | "previous" => Focus::Control(Control::Previous),
                "page" => Focus::Elsewhere,
                other => bail!("unknown key target '{other}'"),
            };
            let key = match key {
                "Space" | "space" => Key::Space,
                other => Key::from_dom_key(other),
            };
            ScriptEvent::Input(Input::KeyDown { focus, key })
        }
        _ => bail!("unrecognized carousel command '{line}'"),
    };
    if words.next().is_some() {
        bail!("trailing words in carousel command '{line}'");
    }
    Ok(Some(event))
}

#[derive(serde::Serialize)]
struct CarouselLine<'a> {
    line: usize,
    command: &'a str,
    view: Option<hijama_fx::CarouselView>,
}

fn cmd_carousel(cfg: &hijama_fx::FxConfig, args: CarouselArgs) -> anyhow::Result<()> {
    let layout = match (&args.widths, args.items) {
        (Some(widths), _) => hijama_fx::HStackLayout::from_widths(widths, args.gap, 0.0),
        (None, Some(n)) => {
            let widths = vec![args.item_width; n];
            hijama_fx::HStackLayout::from_widths(&widths, args.gap, 0.0)
        }
        (None, None) => bail!("one of --items or --widths is required"),
    };
    let mut controller =
        hijama_fx::CarouselController::for_width(layout, args.width_px, cfg.carousel);

    let reader: Box<dyn BufRead> = match &args.script {
        Some(p) if p != Path::new("-") => Box::new(BufReader::new(
            std::fs::File::open(p)
                .with_context(|| format!("open carousel script '{}'", p.display()))?,
        )),
        _ => Box::new(BufReader::new(std::io::stdin())),
    };

    let mut stdout = std::io::stdout().lock();
    let initial = CarouselLine {
        line: 0,
        command: "init",
        view: Some(controller.view()),
    };
    serde_json::to_writer(&mut stdout, &initial)?;
    writeln!(stdout)?;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("read carousel script")?;
        let Some(event) =
            parse_script_line(&line).with_context(|| format!("script line {}", idx + 1))?
        else {
            continue;
        };
        let view = match event {
            ScriptEvent::Resize(w) => Some(controller.resize_to_width(w)),
            ScriptEvent::Input(input) => controller.handle(input),
        };
        let out = CarouselLine {
            line: idx + 1,
            command: line.trim(),
            view,
        };
        serde_json::to_writer(&mut stdout, &out)?;
        writeln!(stdout)?;
    }
    Ok(())
}
