use crate::ports::outbound::{DocumentStore, OutputPresenter, WriteOutcome};
use crate::shared::error::LicenseReportError;
use crate::shared::fs::{check_write_target, write_atomically};
use crate::shared::security::validate_readable_file;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// FileSystemDocumentStore adapter for the markdown and HTML targets
///
/// Writes go to a temporary file in the target's directory which is then
/// renamed over the target, so the document is either fully replaced or
/// left untouched.
pub struct FileSystemDocumentStore;

impl FileSystemDocumentStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for FileSystemDocumentStore {
    fn read_document(&self, path: &Path) -> Result<String> {
        validate_readable_file(path, "document")
            .and_then(|_| fs::read_to_string(path).map_err(anyhow::Error::from))
            .map_err(|e| {
                LicenseReportError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }

    fn write_document(&self, path: &Path, content: &str) -> Result<WriteOutcome> {
        check_write_target(path)?;

        if let Ok(existing) = fs::read_to_string(path) {
            if existing == content {
                return Ok(WriteOutcome::Unchanged);
            }
        }

        write_atomically(path, content)?;
        Ok(WriteOutcome::Written)
    }
}

/// StdoutPresenter adapter for writing output to stdout
///
/// This adapter implements the OutputPresenter port for `--dry-run`.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
