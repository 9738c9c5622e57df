// src/storage/mod.rs
use crate::prospekt::Brochure;
use crate::utils::error::StorageError;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output file used when the caller does not name one.
pub const DEFAULT_OUTPUT_FILE: &str = "brochures.json";

pub struct StorageManager {
    output_path: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager writing to the specified file
    pub fn new<P: AsRef<Path>>(output_path: P) -> Self {
        Self {
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes all brochures as one JSON array, replacing any previous file.
    /// Returns the number of records written.
    pub fn save_brochures(&self, brochures: &[Brochure]) -> Result<usize, StorageError> {
        // Create the parent directory if it doesn't exist
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = fs::File::create(&self.output_path)?;
        let mut writer = BufWriter::new(file);

        // 4-space indentation; serde_json leaves non-ASCII characters unescaped
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        brochures.serialize(&mut serializer)?;

        writer.flush()?;

        tracing::info!("Saved {} brochures to {}", brochures.len(), self.output_path.display());

        Ok(brochures.len())
    }
}

impl Default for StorageManager {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_FILE)
    }
}
