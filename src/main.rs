mod error;
mod fetch;
mod model;
mod output;
mod parser;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "apidoc_scraper", about = "Webshare API documentation scraper")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the documentation page and extract all endpoint records
    Run {
        /// Documentation page URL
        #[arg(long, default_value = fetch::APIDOC_URL)]
        url: String,
        /// Output JSON path
        #[arg(short, long, default_value = output::DEFAULT_OUT)]
        out: PathBuf,
        /// Extraction worker count
        #[arg(short, long, default_value_t = parser::DEFAULT_WORKERS)]
        workers: usize,
    },
    /// Extract endpoint records from a locally saved documentation page
    Extract {
        /// Path to a saved HTML page
        input: PathBuf,
        /// Output JSON path
        #[arg(short, long, default_value = output::DEFAULT_OUT)]
        out: PathBuf,
        /// Extraction worker count
        #[arg(short, long, default_value_t = parser::DEFAULT_WORKERS)]
        workers: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { url, out, workers } => {
            let markup = fetch::fetch_page(&url).await?;
            run_pipeline(&markup, &out, workers)
        }
        Commands::Extract { input, out, workers } => {
            let markup = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            run_pipeline(&markup, &out, workers)
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn run_pipeline(markup: &str, out: &Path, workers: usize) -> Result<()> {
    let blocks = parser::discover_blocks(markup);
    if blocks.is_empty() {
        anyhow::bail!("No endpoint blocks found; the page layout has likely changed");
    }

    println!("Extracting {} endpoint blocks...", blocks.len());
    let docs = parser::extract_all(&blocks, workers)?;
    output::write_endpoints(&docs, out)?;

    let with_params = docs.iter().filter(|d| d.params.is_some()).count();
    let samples: usize = docs
        .iter()
        .map(|d| d.requests.len() + d.responses.len() + d.errors.len())
        .sum();
    println!(
        "Saved {} endpoints ({} with params, {} samples) to {}",
        docs.len(),
        with_params,
        samples,
        out.display()
    );
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
