use clap::{Parser, ValueEnum};
use log::info;
use slidedeck::{DeckBuilder, PipelineError, load_pages};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Standalone HTML document
    Html,
    /// Heading outline as JSON
    Outline,
    /// Outline plus rendered pages as JSON
    Json,
}

/// Outline and render a composited slide deck.
#[derive(Parser, Debug)]
#[command(name = "slidedeck", version, about)]
struct Cli {
    /// JSON array of pages produced by the compositor
    pages: PathBuf,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Deck configuration (deck.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme file, overriding the configured theme
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Drop pages with malformed layout trees instead of failing
    #[arg(long)]
    skip_malformed: bool,
}

fn run(cli: Cli) -> Result<(), PipelineError> {
    let mut builder = DeckBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.with_config_file(path)?;
    }
    if let Some(path) = &cli.theme {
        builder = builder.with_theme_file(path)?;
    }
    if cli.skip_malformed {
        builder = builder.with_skip_malformed_pages(true);
    }
    let deck = builder.build()?;

    info!("Loading pages from {}", cli.pages.display());
    let pages = load_pages(&cli.pages)?;

    let output = match cli.format {
        OutputFormat::Html => deck.to_html(pages)?,
        OutputFormat::Outline => serde_json::to_string_pretty(&deck.outline(&pages)?)?,
        OutputFormat::Json => serde_json::to_string_pretty(&deck.compose(pages)?)?,
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, output)?;
            info!("Wrote {}", path.display());
        }
        None => io::stdout().write_all(output.as_bytes())?,
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
