use crate::license_report::domain::DependencyNode;

/// ReportFormatter port for rendering the retained nodes
///
/// Implementations are pure: the same node sequence always renders to the
/// same text.
pub trait ReportFormatter {
    /// Renders the nodes, in the given order, into the formatter's text form
    fn format(&self, nodes: &[DependencyNode]) -> String;
}
