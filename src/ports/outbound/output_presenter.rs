use crate::shared::Result;

/// OutputPresenter port for presenting rendered output
///
/// Used by `--dry-run` to show the rendered table and HTML fragment
/// instead of writing them into the target documents.
pub trait OutputPresenter {
    /// Presents the rendered content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
