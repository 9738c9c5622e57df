// src/pipeline.rs
use crate::extractors::BrochureExtractor;
use crate::prospekt::BrochureClient;
use crate::storage::StorageManager;
use crate::utils::error::StorageError;
use std::path::PathBuf;

/// How a run ended. Each variant maps to one line on stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The listing page could not be fetched.
    NoPage,
    /// The page was fetched but held no complete brochure.
    NoBrochures,
    Saved { count: usize, path: PathBuf },
}

impl RunOutcome {
    pub fn message(&self) -> String {
        match self {
            RunOutcome::NoPage => "Failed to fetch page content.".to_string(),
            RunOutcome::NoBrochures => "No brochures found.".to_string(),
            RunOutcome::Saved { count, path } => {
                format!("Saved {} brochures to {}", count, path.display())
            }
        }
    }
}

/// Extracts brochures from already fetched markup and stores them.
/// Nothing is written when the markup is empty or yields no brochures.
pub fn process_markup(
    markup: &str,
    extractor: &BrochureExtractor,
    storage: &StorageManager,
) -> Result<RunOutcome, StorageError> {
    if markup.is_empty() {
        return Ok(RunOutcome::NoPage);
    }

    let brochures = extractor.parse_brochures(markup);
    if brochures.is_empty() {
        return Ok(RunOutcome::NoBrochures);
    }

    let count = storage.save_brochures(&brochures)?;
    Ok(RunOutcome::Saved {
        count,
        path: storage.output_path().to_path_buf(),
    })
}

/// Fetch, extract, store.
pub async fn run(
    client: &BrochureClient,
    extractor: &BrochureExtractor,
    storage: &StorageManager,
) -> Result<RunOutcome, StorageError> {
    let markup = client.fetch_page().await;
    process_markup(&markup, extractor, storage)
}
