use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use elemcards::{LayoutConfig, RunConfig, SourceKind};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SourceArg {
    /// Built-in table of 118 elements
    Embedded,
    /// Fetch the periodic-table JSON document over HTTP
    Remote,
}

/// Render one PNG card per chemical element.
#[derive(Parser, Debug)]
#[command(name = "elemcards", version, about)]
struct Cli {
    /// Path to a .ttf/.otf font file
    #[arg(long, value_name = "FILE", default_value = "font.ttf")]
    font: PathBuf,

    /// JSON object mapping category names to hex colors
    #[arg(long, alias = "colors", value_name = "FILE", default_value = "colours.json")]
    colours: PathBuf,

    /// Output directory, created if missing
    #[arg(long, value_name = "DIR", default_value = "elements")]
    outdir: PathBuf,

    /// Tile height in px (width follows the aspect ratio)
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Where element data comes from
    #[arg(long, value_enum, default_value = "embedded")]
    source: SourceArg,

    /// URL of the element document for `--source remote`
    #[arg(long, value_name = "URL")]
    source_url: Option<String>,

    /// Timeout for the remote fetch in seconds
    #[arg(long, default_value_t = 20)]
    timeout_secs: u64,

    /// JSON file overriding layout proportions
    #[arg(long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Decimal places for the atomic mass
    #[arg(long)]
    mass_precision: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace); RUST_LOG overrides
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut layout = match &self.layout {
            Some(path) => LayoutConfig::load(path)
                .with_context(|| format!("loading layout {}", path.display()))?,
            None => LayoutConfig::default(),
        };
        if let Some(p) = self.mass_precision {
            layout.mass_precision = p;
        }

        let defaults = RunConfig::default();
        Ok(RunConfig {
            font_path: self.font.clone(),
            colors_path: self.colours.clone(),
            outdir: self.outdir.clone(),
            height: self.height,
            layout,
            source: match self.source {
                SourceArg::Embedded => SourceKind::Embedded,
                SourceArg::Remote => SourceKind::Remote,
            },
            source_url: self.source_url.clone().unwrap_or(defaults.source_url),
            timeout_ms: self.timeout_secs.saturating_mul(1000),
        })
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.run_config()?;
    let summary = elemcards::generate(&config, |tile| {
        let name = tile
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("Written: {}", name);
    })
    .context("card generation failed")?;

    println!(
        "{} written, {} failed",
        summary.written.len(),
        summary.failures.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match elemcards::logging::normalize_level(&cli.log_level) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("elemcards: {}", e);
            return ExitCode::from(2);
        }
    };
    let _logger = match elemcards::logging::init(&level) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("elemcards: logging disabled: {}", e);
            None
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("elemcards: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
