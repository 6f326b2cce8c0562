/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (resolver, file system, console).
pub mod document_store;
pub mod formatter;
pub mod graph_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use document_store::{DocumentStore, WriteOutcome};
pub use formatter::ReportFormatter;
pub use graph_source::GraphSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
