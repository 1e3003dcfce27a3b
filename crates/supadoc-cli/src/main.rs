mod config;

use std::fs;

use clap::Parser;
use thiserror::Error;

use supadoc_core::{render_report, Error as CoreError};
use supadoc_introspect::{introspect_supabase, SupabaseAdapter};

use config::Config;

/// Fixed output file, overwritten on every run.
const OUTPUT_FILE: &str = "supabase_schema.md";

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "supadoc",
    version,
    about = "Render a Supabase project's public schema as a markdown report"
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    Cli::parse();

    dotenv::dotenv().ok();
    init_logging();

    let config = Config::from_env()?;
    let adapter = SupabaseAdapter::new(&config.url, &config.key)?;

    tracing::info!("introspecting {}", config.url);
    let report = match introspect_supabase(&adapter).await {
        Ok(report) => report,
        Err(CoreError::Discovery { status, body }) => {
            println!("Error fetching schema information: {status}");
            println!("{body}");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let names: Vec<&str> = report
        .tables
        .iter()
        .map(|table| table.name.as_str())
        .collect();

    fs::write(OUTPUT_FILE, render_report(&report))?;

    println!("Schema information has been saved to {OUTPUT_FILE}");
    println!("Found tables: {}", names.join(", "));

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
