use crate::license_report::domain::{DependencyNode, ReportRow};
use crate::ports::outbound::ReportFormatter;

/// Table header line
const TABLE_HEADER: &str = "Title | Link | License";

/// Table separator line
const TABLE_SEPARATOR: &str = "--- | --- | ---";

/// MarkdownTableFormatter adapter rendering the pipe-delimited license table
///
/// Produces the text placed between the markers of the markdown document.
/// Lines are joined with `\n` and the table has no trailing newline; the
/// splicer supplies the newlines around it.
pub struct MarkdownTableFormatter;

impl MarkdownTableFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_row(row: &ReportRow) -> String {
        format!("{}|{}|{}", row.reference, row.homepage, row.license)
    }
}

impl Default for MarkdownTableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownTableFormatter {
    fn format(&self, nodes: &[DependencyNode]) -> String {
        let mut lines = vec![TABLE_HEADER.to_string(), TABLE_SEPARATOR.to_string()];
        lines.extend(ReportRow::from_nodes(nodes).iter().map(Self::render_row));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_report::domain::{BuildContext, LicenseField, PackageType};

    fn node(reference: &str, homepage: Option<&str>, license: Option<LicenseField>) -> DependencyNode {
        DependencyNode::new(
            reference,
            homepage.map(str::to_string),
            license,
            PackageType::StaticLibrary,
            BuildContext::Host,
        )
    }

    #[test]
    fn test_format_empty_table() {
        let output = MarkdownTableFormatter::new().format(&[]);
        assert_eq!(output, "Title | Link | License\n--- | --- | ---");
    }

    #[test]
    fn test_format_rows() {
        let nodes = vec![
            node(
                "zlib/1.3.1#f52e03ae",
                Some("https://zlib.net"),
                Some(LicenseField::Single("Zlib".to_string())),
            ),
            node(
                "boost/1.84.0",
                Some("https://www.boost.org"),
                Some(LicenseField::Multiple(vec!["BSL-1.0".to_string()])),
            ),
        ];

        let output = MarkdownTableFormatter::new().format(&nodes);
        assert_eq!(
            output,
            "Title | Link | License\n\
             --- | --- | ---\n\
             zlib/1.3.1|https://zlib.net|Zlib\n\
             boost/1.84.0|https://www.boost.org|[\"BSL-1.0\"]"
        );
    }

    #[test]
    fn test_format_absent_values() {
        let output = MarkdownTableFormatter::new().format(&[node("mystery/0.1", None, None)]);
        assert!(output.ends_with("\nmystery/0.1|None|None"));
    }

    #[test]
    fn test_format_is_deterministic() {
        let nodes = vec![
            node("a/1.0", Some("https://a"), None),
            node("b/2.0", None, Some(LicenseField::Single("MIT".to_string()))),
        ];
        let formatter = MarkdownTableFormatter::new();
        assert_eq!(formatter.format(&nodes), formatter.format(&nodes));
    }
}
