//! conan-license-report - third-party license reporting for Conan projects
//!
//! This library resolves a project's dependency graph, keeps the nodes that
//! end up in the shipped product, and splices a license table into a
//! markdown document and a standalone HTML page. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_report`): Graph model, filtering and splicing logic
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use conan_license_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let graph_source = ConanGraphResolver::new(PathBuf::from("."), "default");
//! let document_store = FileSystemDocumentStore::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case =
//!     GenerateLicenseReportUseCase::new(graph_source, document_store, progress_reporter);
//!
//! // Execute
//! let request = ReportRequest::builder()
//!     .filter_mode(FilterMode::Strict)
//!     .build()?;
//! let response = use_case.execute(request)?;
//! println!("{}", response.table);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod license_report;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDocumentStore, GraphFileReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{HtmlFragmentFormatter, MarkdownTableFormatter};
    pub use crate::adapters::outbound::resolver::ConanGraphResolver;
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::factories::{FormatterFactory, ReportKind};
    pub use crate::application::use_cases::GenerateLicenseReportUseCase;
    pub use crate::license_report::domain::{
        BuildContext, DependencyGraph, DependencyNode, LicenseField, PackageType, ReportRow,
    };
    pub use crate::license_report::services::{
        DocumentSplicer, FilterMode, GraphParser, NodeFilter, DEFAULT_MARKER,
    };
    pub use crate::ports::outbound::{
        DocumentStore, GraphSource, OutputPresenter, ProgressReporter, ReportFormatter,
        WriteOutcome,
    };
    pub use crate::shared::error::{ExitCode, LicenseReportError};
    pub use crate::shared::Result;
}
