// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Connection errors, timeouts, body decoding

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode), // Any non-2xx status
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
