use crate::shared::Result;
use std::path::Path;

/// Outcome of writing a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The document content changed on disk
    Written,
    /// The document already had exactly this content; nothing was written
    Unchanged,
}

/// DocumentStore port for reading and replacing target documents
///
/// Implementations must write the whole content or nothing: a failed write
/// leaves the previous document in place.
pub trait DocumentStore {
    /// Reads the full text of an existing document
    ///
    /// # Errors
    /// Returns an error if the document does not exist or cannot be read
    fn read_document(&self, path: &Path) -> Result<String>;

    /// Replaces the full text of a document, creating it if missing
    ///
    /// # Errors
    /// Returns an error if the parent directory is missing, the target is a
    /// symbolic link, or the write fails
    fn write_document(&self, path: &Path, content: &str) -> Result<WriteOutcome>;
}
