// src/prospekt/client.rs
use crate::utils::error::FetchError;
use std::time::Duration;
use tracing::{Instrument, Span};

/// Listing page for hypermarket brochures.
pub const BASE_URL: &str = "https://www.prospektmaschine.de/hypermarkte/";
/// Upper bound for the whole request, body included.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: BASE_URL.to_string(),
            timeout: FETCH_TIMEOUT,
        }
    }
}

/// Fetches the listing page. Logs through the span handed in by the caller.
pub struct BrochureClient {
    config: ClientConfig,
    span: Span,
}

impl BrochureClient {
    pub fn new(config: ClientConfig, span: Span) -> Self {
        Self { config, span }
    }

    /// Creates a reqwest client for a single request. No retries, default headers.
    fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()
    }

    /// Downloads the listing page, returning the body or the failure cause.
    pub async fn try_fetch_page(&self) -> Result<String, FetchError> {
        self.request().instrument(self.span.clone()).await
    }

    /// Downloads the listing page. Any failure is logged and reported as an
    /// empty string, which callers treat as "no page".
    pub async fn fetch_page(&self) -> String {
        match self.try_fetch_page().await {
            Ok(body) => body,
            Err(e) => {
                self.span
                    .in_scope(|| tracing::error!("Error fetching page: {}", e));
                String::new()
            }
        }
    }

    async fn request(&self) -> Result<String, FetchError> {
        let url = self.config.url.as_str();
        let client = self.build_client()?;
        tracing::info!("Downloading listing page from: {}", url);

        let response = client.get(url).send().await?;

        // Check if the request was successful (status code 2xx)
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("HTTP error status: {} for URL: {}", status, url);
            return Err(FetchError::Http(status));
        }

        let body = response.text().await?;
        tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);

        Ok(body)
    }
}
