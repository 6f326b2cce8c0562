pub mod dependency_graph;
pub mod dependency_node;
pub mod report_row;

pub use dependency_graph::DependencyGraph;
pub use dependency_node::{
    canonical_reference, BuildContext, DependencyNode, LicenseField, PackageType,
};
pub use report_row::{ReportRow, ABSENT_VALUE};
