use crate::adapters::outbound::formatters::{HtmlFragmentFormatter, MarkdownTableFormatter};
use crate::ports::outbound::ReportFormatter;

/// Which rendering of the report a formatter produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Pipe-delimited table for the markdown document
    Table,
    /// Standalone HTML page
    Html,
}

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for the formatter
/// implementations, keeping the use case free of concrete adapter types.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the requested rendering
    ///
    /// # Examples
    /// ```
    /// use conan_license_report::application::factories::{FormatterFactory, ReportKind};
    /// use conan_license_report::ports::outbound::ReportFormatter;
    ///
    /// let formatter = FormatterFactory::create(ReportKind::Table);
    /// assert_eq!(formatter.format(&[]), "Title | Link | License\n--- | --- | ---");
    /// ```
    pub fn create(kind: ReportKind) -> Box<dyn ReportFormatter> {
        match kind {
            ReportKind::Table => Box::new(MarkdownTableFormatter::new()),
            ReportKind::Html => Box::new(HtmlFragmentFormatter::new()),
        }
    }

    /// Returns the progress message for the requested rendering
    pub fn progress_message(kind: ReportKind) -> &'static str {
        match kind {
            ReportKind::Table => "📝 Rendering license table...",
            ReportKind::Html => "📝 Rendering HTML license page...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_formatter() {
        let formatter = FormatterFactory::create(ReportKind::Table);
        assert!(formatter.format(&[]).starts_with("Title | Link | License"));
    }

    #[test]
    fn test_create_html_formatter() {
        let formatter = FormatterFactory::create(ReportKind::Html);
        assert!(formatter.format(&[]).starts_with("<html>"));
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(ReportKind::Table),
            "📝 Rendering license table..."
        );
        assert_eq!(
            FormatterFactory::progress_message(ReportKind::Html),
            "📝 Rendering HTML license page..."
        );
    }
}
