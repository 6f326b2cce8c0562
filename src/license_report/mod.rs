/// Domain layer - dependency graph model and the pure report logic
///
/// Nothing in here performs I/O.
pub mod domain;
pub mod services;
