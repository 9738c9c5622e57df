// src/main.rs
mod extractors;
mod pipeline;
mod prospekt;
mod storage;
mod utils;

use clap::Parser;
use extractors::BrochureExtractor;
use prospekt::{BrochureClient, ClientConfig};
use storage::{StorageManager, DEFAULT_OUTPUT_FILE};
use utils::AppError;

/// Scrapes the hypermarket brochure listing into a JSON file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file for the extracted brochures
    #[arg(default_value = DEFAULT_OUTPUT_FILE)]
    output: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting run with args: {:?}", args);

    // 3. Wire up the pipeline; the client logs inside its own span
    let client = BrochureClient::new(ClientConfig::default(), tracing::info_span!("fetch"));
    let extractor = BrochureExtractor::new();
    let storage = StorageManager::new(&args.output);

    // 4. Fetch, extract, store. Write failures abort the run.
    let outcome = pipeline::run(&client, &extractor, &storage).await?;
    println!("{}", outcome.message());

    Ok(())
}
