use crate::license_report::domain::{DependencyNode, ReportRow};
use crate::ports::outbound::ReportFormatter;

const FRAGMENT_OPEN: &str = "<html>\n<div style=\"text-align: center;\">\n";
const FRAGMENT_CLOSE: &str = "</div>\n</html>\n";

/// HtmlFragmentFormatter adapter rendering the standalone HTML license page
///
/// One line per dependency inside a centered block:
/// `zlib/1.3.1 : <a href="https://zlib.net">https://zlib.net</a> | Zlib<br/>`.
/// Values are emitted verbatim, without HTML escaping.
pub struct HtmlFragmentFormatter;

impl HtmlFragmentFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_row(row: &ReportRow) -> String {
        format!(
            "{} : <a href=\"{}\">{}</a> | {}<br/>\n",
            row.reference, row.homepage, row.homepage, row.license
        )
    }
}

impl Default for HtmlFragmentFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HtmlFragmentFormatter {
    fn format(&self, nodes: &[DependencyNode]) -> String {
        let mut output = String::from(FRAGMENT_OPEN);
        for row in ReportRow::from_nodes(nodes) {
            output.push_str(&Self::render_row(&row));
        }
        output.push_str(FRAGMENT_CLOSE);
        output
    }
}
