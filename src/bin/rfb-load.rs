//! rfb-load - import converted JSON records into SQLite and list them

use clap::Parser;
use std::path::PathBuf;
use std::process;

use rfbjson::db::{RecordStore, DEFAULT_DATABASE};
use rfbjson::view::render_records;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rfb-load")]
#[command(version, about = "Import JSON record files into SQLite", long_about = None)]
struct Cli {
    /// Directory containing the JSON record files
    directory: PathBuf,

    /// SQLite database file (created if absent)
    #[arg(short, long, default_value = DEFAULT_DATABASE)]
    database: PathBuf,
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
    // The store is dropped, and its connection closed, when run returns.
    let store = RecordStore::open(&cli.database)
        .map_err(|e| format!("Failed to connect to database: {}", e))?;

    store
        .create_table()
        .map_err(|e| format!("Failed to create table: {}", e))?;

    println!("📦 Importing JSON files from {}...", cli.directory.display());

    let report = store
        .import_directory(&cli.directory)
        .map_err(|e| e.to_string())?;

    for outcome in &report.outcomes {
        let name = outcome.source.display();
        match &outcome.result {
            Ok(rows) => println!("  ✓ {} imported ({} rows)", name, rows),
            Err(e) => eprintln!("  ✗ Error processing {}: {}", name, e),
        }
    }

    println!(
        "✨ {} file(s) imported, {} row(s) inserted.",
        report.imported(),
        report.rows()
    );

    let records = store
        .all_records()
        .map_err(|e| format!("Failed to read records: {}", e))?;

    let stdout = std::io::stdout();
    render_records(&mut stdout.lock(), &records)
        .map_err(|e| format!("Failed to display records: {}", e))?;

    Ok(())
}
