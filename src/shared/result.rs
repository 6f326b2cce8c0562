/// Result alias used across the crate; errors are `anyhow::Error` so that
/// `LicenseReportError` values can be downcast again at the exit-code boundary.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
