use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use scalesheet::{ScalerConfig, ScreenMetrics, StyleScaler};

#[derive(Parser, Debug)]
#[command(name = "scalesheet", version)]
struct Cli {
    /// Log scaling decisions to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scale a style sheet JSON document.
    Create(CreateArgs),
    /// Scale a single number.
    Scale(ScaleArgs),
    /// Print a percentage of the screen width and height.
    Screen(ScreenArgs),
}

#[derive(Args, Debug, Clone, Copy)]
struct MetricsArgs {
    /// Screen width.
    #[arg(long)]
    width: f64,

    /// Screen height.
    #[arg(long)]
    height: f64,
}

#[derive(Args, Debug)]
struct CreateArgs {
    /// Input style sheet JSON (a single object).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Scaler config JSON.
    #[arg(long, conflicts_with = "legacy")]
    config: Option<PathBuf>,

    /// Reproduce the deployed behaviour (unscaled arrays, wrapper recursion).
    #[arg(long)]
    legacy: bool,

    #[command(flatten)]
    metrics: MetricsArgs,
}

#[derive(Args, Debug)]
struct ScaleArgs {
    /// Value authored against the baseline screen.
    #[arg(allow_negative_numbers = true)]
    value: f64,

    #[command(flatten)]
    metrics: MetricsArgs,
}

#[derive(Args, Debug)]
struct ScreenArgs {
    /// Percentage of each dimension.
    #[arg(long, default_value_t = 100.0)]
    percent: f64,

    #[command(flatten)]
    metrics: MetricsArgs,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Create(args) => cmd_create(args),
        Command::Scale(args) => cmd_scale(args),
        Command::Screen(args) => cmd_screen(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn screen(args: MetricsArgs) -> anyhow::Result<ScreenMetrics> {
    ScreenMetrics::new(args.width, args.height).context("invalid --width/--height")
}

fn read_styles(path: &Path) -> anyhow::Result<serde_json::Value> {
    let f = File::open(path).with_context(|| format!("open style sheet '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f)).with_context(|| "parse style sheet JSON")
}

fn cmd_create(args: CreateArgs) -> anyhow::Result<()> {
    let config = match (&args.config, args.legacy) {
        (Some(path), _) => ScalerConfig::from_path(path)?,
        (None, true) => ScalerConfig::legacy(),
        (None, false) => ScalerConfig::default(),
    };
    let scaler = StyleScaler::with_config(screen(args.metrics)?, config)?;

    let styles = read_styles(&args.in_path)?;
    let scaled = scaler
        .create_json(styles)
        .with_context(|| format!("scale '{}'", args.in_path.display()))?;

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(out).with_context(|| format!("create '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &scaled)?;
            writeln!(w)?;
            w.flush()?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&scaled)?),
    }
    Ok(())
}

fn cmd_scale(args: ScaleArgs) -> anyhow::Result<()> {
    let scaler = StyleScaler::new(screen(args.metrics)?);
    println!("{}", scaler.scale(args.value));
    Ok(())
}

fn cmd_screen(args: ScreenArgs) -> anyhow::Result<()> {
    let scaler = StyleScaler::new(screen(args.metrics)?);
    println!(
        "{} {}",
        scaler.screen_width_pct(args.percent),
        scaler.screen_height_pct(args.percent)
    );
    Ok(())
}
