use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build pipelines to tell a resolver problem apart from
/// a document update problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - both documents are up to date
    Success = 0,
    /// The dependency graph could not be obtained or parsed
    ResolutionFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing marker, file I/O error, invalid config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned from the run.
    ///
    /// Errors that are not a [`LicenseReportError`] anywhere in their chain
    /// are reported as application errors.
    pub fn for_error(error: &anyhow::Error) -> Self {
        let report_error = error
            .chain()
            .find_map(|cause| cause.downcast_ref::<LicenseReportError>());

        match report_error {
            Some(e) if e.is_resolution_error() => ExitCode::ResolutionFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ResolutionFailed => write!(f, "Resolution Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license report generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping user-facing messages next to the variants they describe.
#[derive(Debug, Error)]
pub enum LicenseReportError {
    #[error("Dependency graph resolution failed: `{command}`\nDetails: {details}\n\n💡 Hint: Run the command manually and check that the manifest and profile are valid")]
    ResolverFailed { command: String, details: String },

    #[error("Failed to read dependency graph file: {path}\nDetails: {details}\n\n💡 Hint: Pass the JSON written by `conan graph info --format=json`, or drop --graph-file to run the resolver")]
    GraphFileError { path: PathBuf, details: String },

    #[error("Failed to parse dependency graph from {source_name}\nDetails: {details}\n\n💡 Hint: The graph must be JSON with a `nodes` object (e.g. `conan graph info --format=json`)")]
    GraphParseError { source_name: String, details: String },

    #[error("Marker `{marker}` found {occurrences} time(s) in {path}, expected at least 2\n\n💡 Hint: Add a pair of `{marker}` lines around the region that should hold the license table")]
    MissingMarker {
        path: PathBuf,
        marker: String,
        occurrences: usize,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Invalid configuration value
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl LicenseReportError {
    /// True for errors raised before any document was touched because the
    /// graph could not be obtained.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            LicenseReportError::ResolverFailed { .. }
                | LicenseReportError::GraphFileError { .. }
                | LicenseReportError::GraphParseError { .. }
        )
    }
}
