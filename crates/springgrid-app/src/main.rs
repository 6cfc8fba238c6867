// ABOUTME: Main application entry point.
// ABOUTME: Loads a layout file, solves its grid, and prints the cell rectangles.

mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use springgrid_core::{Config, GridMode, LayoutFile, OutputFormat};
use springgrid_layout::{solve, Element, SpringPanel};
use tracing_subscriber::EnvFilter;

use report::Report;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Uniform,
    Compact,
}

impl From<ModeArg> for GridMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Uniform => GridMode::Uniform,
            ModeArg::Compact => GridMode::Compact,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "springgrid")]
#[command(about = "Solve a spring-constraint grid layout and print the cell positions")]
struct Cli {
    /// Layout description (TOML) with [grid] and [[element]] tables
    layout: PathBuf,

    /// Solver to use, overriding the layout file and config
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Horizontal padding after every column
    #[arg(long)]
    pad_x: Option<i32>,

    /// Vertical padding after every row
    #[arg(long)]
    pad_y: Option<i32>,

    /// Left edge of the first column
    #[arg(long, allow_negative_numbers = true)]
    origin_x: Option<i32>,

    /// Top edge of the first row
    #[arg(long, allow_negative_numbers = true)]
    origin_y: Option<i32>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Config file (defaults to ~/.config/springgrid/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            Config::load(path).with_context(|| format!("reading config {}", path.display()))
        }
        None => Ok(Config::load_or_default()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    let mut layout = LayoutFile::load(&cli.layout)
        .with_context(|| format!("reading layout {}", cli.layout.display()))?;
    if let Some(mode) = cli.mode {
        layout.grid.mode = Some(mode.into());
    }
    layout.grid.pad_x = cli.pad_x.or(layout.grid.pad_x);
    layout.grid.pad_y = cli.pad_y.or(layout.grid.pad_y);
    layout.grid.origin_x = cli.origin_x.or(layout.grid.origin_x);
    layout.grid.origin_y = cli.origin_y.or(layout.grid.origin_y);

    let (spec, mode) = layout
        .grid_spec(&config)
        .with_context(|| format!("resolving grid for {}", cli.layout.display()))?;

    let mut panel = SpringPanel::with_elements(
        layout
            .elements
            .iter()
            .map(|element| Element::new(element.name.clone(), element.size())),
    );

    tracing::info!(
        "Solving {} grid: {} rows x {} cols, {} elements",
        mode.label(),
        spec.rows,
        spec.cols,
        layout.elements.len()
    );
    if let Err(e) = solve(&mut panel, &spec, mode) {
        tracing::error!("Layout failed: {}", e);
        return Err(e.into());
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };
    let report = Report::from_panel(&panel, &spec, mode);
    report.write(format, &mut std::io::stdout().lock())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}
