/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist; the CLI drives the use case directly.
pub mod outbound;
