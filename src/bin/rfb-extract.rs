//! rfb-extract - convert fixed-width .rfb files to JSON
//!
//! Scans a directory for legacy files, decodes every record with the given
//! tag and writes `<name>.json` next to each file that has one.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use rfbjson::convert::{convert_directory, ConversionOptions, FileStatus, DEFAULT_TAG};
use rfbjson::source::RFB_EXTENSION;
use rfbjson::{FieldExtractor, Layout};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rfb-extract")]
#[command(version, about = "Convert fixed-width .rfb files to JSON", long_about = None)]
struct Cli {
    /// Directory containing the .rfb files
    directory: PathBuf,

    /// Record tag to extract
    #[arg(short, long, default_value = DEFAULT_TAG)]
    codigo: String,

    /// Extension of the input files
    #[arg(short, long, default_value = RFB_EXTENSION)]
    extension: String,

    /// Field layout YAML (default: built-in R10 layout)
    #[arg(short, long)]
    layout: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let layout = match &cli.layout {
        Some(path) => Layout::load_from_file(path),
        None => Layout::r10(),
    }
    .map_err(|e| format!("Invalid layout: {}", e))?;

    println!(
        "🔧 Extracting '{}' records from {} (layout {})...",
        cli.codigo,
        cli.directory.display(),
        layout.name()
    );

    let extractor = FieldExtractor::new(layout);
    let options = ConversionOptions {
        tag: cli.codigo,
        extension: cli.extension,
    };

    let report = convert_directory(&cli.directory, &extractor, &options)
        .map_err(|e| e.to_string())?;

    for outcome in &report.outcomes {
        let name = outcome.source.display();
        match &outcome.status {
            FileStatus::Converted { output, records } => {
                println!("  ✓ {} → {} ({} records)", name, output.display(), records);
            }
            FileStatus::NoMatches => {
                println!("  ℹ {}: no '{}' records", name, options.tag);
            }
            FileStatus::Failed(e) => {
                eprintln!("  ✗ Error processing {}: {}", name, e);
            }
        }
    }

    println!("✨ Done! {} file(s) converted.", report.converted());

    Ok(())
}
