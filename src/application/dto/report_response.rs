use crate::license_report::domain::DependencyNode;
use crate::ports::outbound::WriteOutcome;

/// ReportResponse - Internal response DTO from the license report use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Number of nodes in the resolved graph
    pub total_nodes: usize,
    /// Nodes retained after filtering and deduplication, in graph order
    pub retained_nodes: Vec<DependencyNode>,
    /// Rendered table placed between the markdown markers
    pub table: String,
    /// Rendered HTML document
    pub html: String,
    /// Markdown target outcome; None on a dry run
    pub markdown_outcome: Option<WriteOutcome>,
    /// HTML target outcome; None on a dry run
    pub html_outcome: Option<WriteOutcome>,
}
