use crate::license_report::services::{FilterMode, DEFAULT_MARKER};
use crate::shared::error::LicenseReportError;
use crate::shared::Result;
use std::path::PathBuf;

/// Default markdown target
pub const DEFAULT_MARKDOWN_PATH: &str = "README.md";

/// Default HTML target
pub const DEFAULT_HTML_PATH: &str = "licenses.html";

/// ReportRequest - Internal request DTO for the license report use case
///
/// Carries everything the run needs besides the graph itself: both target
/// documents, the marker literal and the filter mode.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Markdown document holding the marker-delimited table
    pub markdown_path: PathBuf,
    /// HTML document that is overwritten on every run
    pub html_path: PathBuf,
    /// Literal delimiting the table region in the markdown document
    pub marker: String,
    /// Node filtering strictness
    pub filter_mode: FilterMode,
    /// Render only; leave both documents untouched
    pub dry_run: bool,
}

impl ReportRequest {
    pub fn builder() -> ReportRequestBuilder {
        ReportRequestBuilder::default()
    }
}

/// Builder for [`ReportRequest`]; unset fields take the built-in defaults
#[derive(Debug, Default)]
pub struct ReportRequestBuilder {
    markdown_path: Option<PathBuf>,
    html_path: Option<PathBuf>,
    marker: Option<String>,
    filter_mode: Option<FilterMode>,
    dry_run: bool,
}

impl ReportRequestBuilder {
    pub fn markdown_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.markdown_path = Some(path.into());
        self
    }

    pub fn html_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.html_path = Some(path.into());
        self
    }

    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn filter_mode(mut self, mode: FilterMode) -> Self {
        self.filter_mode = Some(mode);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns a validation error if the marker is blank
    pub fn build(self) -> Result<ReportRequest> {
        let marker = self.marker.unwrap_or_else(|| DEFAULT_MARKER.to_string());
        if marker.trim().is_empty() {
            return Err(LicenseReportError::Validation {
                message: "marker must not be empty".to_string(),
            }
            .into());
        }

        Ok(ReportRequest {
            markdown_path: self
                .markdown_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MARKDOWN_PATH)),
            html_path: self
                .html_path
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HTML_PATH)),
            marker,
            filter_mode: self.filter_mode.unwrap_or_default(),
            dry_run: self.dry_run,
        })
    }
}
