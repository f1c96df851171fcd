// File: crates/skyai-demo/src/main.rs
// Summary: Demo CLI: renders the SkyAI environmental trend cards to SVG/PNG, prints summaries, manages the theme.

mod config;
mod input;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use skyai_chart::metrics::{self, MetricPreset};
use skyai_chart::{
    environmental_history, environmental_snapshot, svg, Chart, ChartProps, FileStorage, Sample,
    SeededRng, Series, Summary, Theme, ThemeMode, ThemeStore,
};
use skyai_render_skia::SkiaRenderer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "SkyAI environmental trend chart renderer", long_about = None)]
struct Cli {
    /// Config file (defaults to ./skyai.toml when present)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one SVG (and optionally PNG) card per metric
    Render(RenderArgs),
    /// Print min/max/avg and optimal-range status per metric
    Summary(DataArgs),
    /// Show or change the persisted theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Args, Debug)]
struct DataArgs {
    /// CSV with a time column and one column per metric
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "history")]
    input: Option<PathBuf>,

    /// Use a generated 24h history instead of the built-in table
    #[arg(long, action = ArgAction::SetTrue)]
    history: bool,

    /// Seed for the generated history (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Metric key to include; repeatable (defaults to config, then all presets)
    #[arg(long = "metric")]
    metrics: Vec<String>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Point index to show as hovered
    #[arg(long)]
    hover: Option<usize>,

    /// Point index to show as selected
    #[arg(long)]
    select: Option<usize>,

    /// Also rasterize each card to PNG
    #[arg(long, action = ArgAction::SetTrue)]
    png: bool,

    /// Output directory (overrides config)
    #[arg(short, long, value_hint = ValueHint::DirPath)]
    out: Option<PathBuf>,

    /// Render with this theme instead of the stored preference
    #[arg(long)]
    theme: Option<ThemeMode>,
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    /// Print the stored theme and its color tokens
    Show,
    /// Flip between light and dark
    Toggle,
    /// Store an explicit mode
    Set { mode: ThemeMode },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    let cfg = DemoConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Render(args) => handle_render(&cfg, args),
        Command::Summary(args) => handle_summary(&cfg, args),
        Command::Theme { action } => handle_theme(&cfg, action),
    }
}

fn load_samples(cfg: &DemoConfig, args: &DataArgs) -> Result<Vec<Sample>> {
    if let Some(path) = &args.input {
        let rows = input::load_samples_csv(path)
            .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
        info!(rows = rows.len(), input = %path.display(), "loaded samples");
        return Ok(rows);
    }
    if args.history {
        let seed = args.seed.unwrap_or(cfg.seed);
        let now = Local::now().naive_local();
        let end = now.with_minute(0).and_then(|t| t.with_second(0)).and_then(|t| t.with_nanosecond(0)).unwrap_or(now);
        info!(seed, "generating 24h history");
        return Ok(environmental_history(&mut SeededRng::new(seed), end, 24));
    }
    Ok(environmental_snapshot())
}

/// CLI metrics, else config metrics, else every preset. Unknown keys are skipped with a warning.
fn selected_presets(cfg: &DemoConfig, args: &DataArgs) -> Vec<&'static MetricPreset> {
    let keys = if !args.metrics.is_empty() { &args.metrics } else { &cfg.metrics };
    if keys.is_empty() {
        return metrics::presets().iter().collect();
    }
    keys.iter()
        .filter_map(|k| {
            let found = metrics::find(k);
            if found.is_none() {
                warn!(metric = %k, "unknown metric preset; skipping");
            }
            found
        })
        .collect()
}

fn load_theme(cfg: &DemoConfig) -> ThemeStore<FileStorage> {
    ThemeStore::load(FileStorage::new(&cfg.theme_store))
}

fn handle_render(cfg: &DemoConfig, args: RenderArgs) -> Result<()> {
    let samples = load_samples(cfg, &args.data)?;
    let theme = match args.theme {
        Some(mode) => Theme::for_mode(mode),
        None => load_theme(cfg).theme(),
    };
    let out_dir = args.out.clone().unwrap_or_else(|| cfg.output_dir.clone());
    let renderer = args.png.then(SkiaRenderer::default);

    let mut written = 0usize;
    for preset in selected_presets(cfg, &args.data) {
        let props = ChartProps::from_preset(preset).with_dimensions(cfg.dimensions());
        let svg_path = out_dir.join(format!("{}.svg", preset.key));

        let mut chart = match Chart::new(props.clone(), samples.clone()) {
            Ok(chart) => chart,
            Err(e) => {
                warn!(metric = preset.key, "cannot plot: {e}");
                write_placeholder(&props, &theme, &svg_path)?;
                continue;
            }
        };
        if let Some(i) = args.select {
            if let Err(e) = chart.click(i) {
                warn!(metric = preset.key, "ignoring --select: {e}");
            }
        }
        if let Some(i) = args.hover {
            if let Err(e) = chart.hover(i) {
                warn!(metric = preset.key, "ignoring --hover: {e}");
            }
        }

        let view = chart.view();
        svg::render_to_svg(&view, &theme, &svg_path)?;
        println!("Wrote {}", svg_path.display());
        if let Some(r) = &renderer {
            let png_path = svg_path.with_extension("png");
            r.render_to_png(&view, &theme, &png_path)
                .with_context(|| format!("rasterizing {}", png_path.display()))?;
            println!("Wrote {}", png_path.display());
        }
        written += 1;
    }
    info!(charts = written, theme = theme.name(), out = %out_dir.display(), "render finished");
    Ok(())
}

fn write_placeholder(props: &ChartProps, theme: &Theme, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg::placeholder(props, theme, "No data"))
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {} (placeholder)", path.display());
    Ok(())
}

fn handle_summary(cfg: &DemoConfig, args: DataArgs) -> Result<()> {
    let samples = load_samples(cfg, &args)?;
    for preset in selected_presets(cfg, &args) {
        let series = match Series::new(preset.key, samples.clone()) {
            Ok(s) => s,
            Err(e) => {
                warn!(metric = preset.key, "no summary: {e}");
                continue;
            }
        };
        let [min, max, avg] = Summary::of(&series).footer(preset.unit);
        let latest = series.values()[series.last_index()];
        let status = match (preset.status(latest), preset.optimal_text) {
            (Some(s), Some(range)) => format!("{} (optimal {range})", s.as_str()),
            _ => "-".to_string(),
        };
        println!(
            "{:<24} {:<18} {:<18} {:<18} now {}{}  {}",
            preset.title, min, max, avg,
            skyai_chart::format::value(latest), preset.unit, status
        );
    }
    Ok(())
}

fn handle_theme(cfg: &DemoConfig, action: ThemeAction) -> Result<()> {
    let mut store = load_theme(cfg);
    let path = cfg.theme_store.display();
    match action {
        ThemeAction::Show => {
            println!("theme: {} ({})", store.mode(), path);
            for (name, value) in store.theme().css_variables() {
                println!("  {name}: {value}");
            }
        }
        ThemeAction::Toggle => {
            let mode = store.toggle().with_context(|| format!("saving theme to {path}"))?;
            println!("theme: {mode}");
        }
        ThemeAction::Set { mode } => {
            store.set(mode).with_context(|| format!("saving theme to {path}"))?;
            println!("theme: {mode}");
        }
    }
    Ok(())
}
