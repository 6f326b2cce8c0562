use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::factories::{FormatterFactory, ReportKind};
use crate::license_report::domain::{DependencyGraph, DependencyNode};
use crate::license_report::services::{DocumentSplicer, GraphParser, NodeFilter};
use crate::ports::outbound::{
    DocumentStore, GraphSource, ProgressReporter, ReportFormatter, WriteOutcome,
};
use crate::shared::error::LicenseReportError;
use crate::shared::Result;
use std::path::Path;

/// GenerateLicenseReportUseCase - Core use case for the license report
///
/// Runs Load -> Filter -> Format -> Splice(markdown) -> Splice(html).
/// A resolution failure stops the run before any document is touched.
/// The two targets are updated independently: the HTML page is written
/// even when the markdown splice fails, and the markdown error is returned
/// afterwards.
///
/// # Type Parameters
/// * `GS` - GraphSource implementation
/// * `DS` - DocumentStore implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateLicenseReportUseCase<GS, DS, PR> {
    graph_source: GS,
    document_store: DS,
    progress_reporter: PR,
}

impl<GS, DS, PR> GenerateLicenseReportUseCase<GS, DS, PR>
where
    GS: GraphSource,
    DS: DocumentStore,
    PR: ProgressReporter,
{
    /// Creates a new GenerateLicenseReportUseCase with injected dependencies
    pub fn new(graph_source: GS, document_store: DS, progress_reporter: PR) -> Self {
        Self {
            graph_source,
            document_store,
            progress_reporter,
        }
    }

    /// Executes the license report use case
    ///
    /// # Arguments
    /// * `request` - Target documents, marker and filter options
    ///
    /// # Returns
    /// ReportResponse with the retained nodes, both renderings and the
    /// per-target outcome
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Load the graph
        let graph = self.load_graph()?;

        // Step 2: Filter and deduplicate
        let retained_nodes = self.filter_nodes(&graph, &request);

        // Step 3: Render both outputs
        let table = self.render(ReportKind::Table, &retained_nodes);
        let html = self.render(ReportKind::Html, &retained_nodes);

        if request.dry_run {
            self.progress_reporter
                .report_completion("Success: Dry run finished. No documents were modified.");
            return Ok(ReportResponse {
                total_nodes: graph.node_count(),
                retained_nodes,
                table,
                html,
                markdown_outcome: None,
                html_outcome: None,
            });
        }

        // Step 4: Update both targets, each independently of the other
        let markdown_result =
            self.splice_markdown(&request.markdown_path, &request.marker, &table);
        if markdown_result.is_err() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Failed to update {}: the HTML page will still be written",
                request.markdown_path.display()
            ));
        }
        let html_result = self.replace_html(&request.html_path, &html);

        let markdown_outcome = markdown_result?;
        let html_outcome = html_result?;

        self.progress_reporter
            .report_completion("✅ License report is up to date.");

        Ok(ReportResponse {
            total_nodes: graph.node_count(),
            retained_nodes,
            table,
            html,
            markdown_outcome: Some(markdown_outcome),
            html_outcome: Some(html_outcome),
        })
    }

    /// Fetches and parses the graph, reporting progress
    fn load_graph(&self) -> Result<DependencyGraph> {
        let source_name = self.graph_source.describe();
        self.progress_reporter
            .report(&format!("📖 Loading dependency graph from: {}", source_name));

        self.progress_reporter.start_step("Resolving dependency graph...");
        let payload = self.graph_source.fetch_graph();
        self.progress_reporter.finish_step();

        let graph = GraphParser::parse(&payload?, &source_name)?;
        self.progress_reporter
            .report(&format!("✅ Detected {} node(s)", graph.node_count()));

        Ok(graph)
    }

    fn filter_nodes(&self, graph: &DependencyGraph, request: &ReportRequest) -> Vec<DependencyNode> {
        let retained = NodeFilter::new(request.filter_mode).filter_graph(graph);
        self.progress_reporter.report(&format!(
            "🔎 Retained {} dependenc{} ({} filter)",
            retained.len(),
            if retained.len() == 1 { "y" } else { "ies" },
            request.filter_mode
        ));
        retained
    }

    fn render(&self, kind: ReportKind, nodes: &[DependencyNode]) -> String {
        self.progress_reporter
            .report(FormatterFactory::progress_message(kind));
        let formatter: Box<dyn ReportFormatter> = FormatterFactory::create(kind);
        formatter.format(nodes)
    }

    /// Replaces the marker region of the markdown document with the table
    ///
    /// The new text is built in memory; nothing is written if the markers
    /// are missing.
    fn splice_markdown(&self, path: &Path, marker: &str, table: &str) -> Result<WriteOutcome> {
        let document = self.document_store.read_document(path)?;

        let spliced = DocumentSplicer::splice(&document, marker, table).map_err(|e| {
            LicenseReportError::MissingMarker {
                path: path.to_path_buf(),
                marker: marker.to_string(),
                occurrences: e.occurrences,
            }
        })?;

        let outcome = self.document_store.write_document(path, &spliced)?;
        self.report_outcome(path, outcome);
        Ok(outcome)
    }

    /// Overwrites the HTML document with the rendered page
    fn replace_html(&self, path: &Path, html: &str) -> Result<WriteOutcome> {
        let outcome = self.document_store.write_document(path, html)?;
        self.report_outcome(path, outcome);
        Ok(outcome)
    }

    fn report_outcome(&self, path: &Path, outcome: WriteOutcome) {
        let message = match outcome {
            WriteOutcome::Written => format!("💾 Updated {}", path.display()),
            WriteOutcome::Unchanged => format!("✔️  {} already up to date", path.display()),
        };
        self.progress_reporter.report(&message);
    }
}
