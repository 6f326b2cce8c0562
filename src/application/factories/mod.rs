/// Factories selecting concrete adapters for the application layer
mod formatter_factory;

pub use formatter_factory::{FormatterFactory, ReportKind};
