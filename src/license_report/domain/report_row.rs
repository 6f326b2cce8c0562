use super::DependencyNode;

/// Token rendered in place of a missing homepage or license.
///
/// Applies to both the table and the HTML fragment.
pub const ABSENT_VALUE: &str = "None";

/// ReportRow - one line of the license report
///
/// Holds exactly the three display fields; built from a retained node right
/// before rendering and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub reference: String,
    pub homepage: String,
    pub license: String,
}

impl ReportRow {
    pub fn from_node(node: &DependencyNode) -> Self {
        Self {
            reference: node.canonical_reference().to_string(),
            homepage: node.homepage().unwrap_or(ABSENT_VALUE).to_string(),
            license: node
                .license()
                .map(|license| license.to_string())
                .unwrap_or_else(|| ABSENT_VALUE.to_string()),
        }
    }

    /// Converts display-ready nodes into rows, keeping their order
    pub fn from_nodes(nodes: &[DependencyNode]) -> Vec<Self> {
        nodes.iter().map(Self::from_node).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_report::domain::{BuildContext, LicenseField, PackageType};

    #[test]
    fn test_row_from_complete_node() {
        let node = DependencyNode::new(
            "fmt/10.2.1#0e3d6e0d",
            Some("https://fmt.dev".to_string()),
            Some(LicenseField::Single("MIT".to_string())),
            PackageType::StaticLibrary,
            BuildContext::Host,
        );

        let row = ReportRow::from_node(&node);
        assert_eq!(row.reference, "fmt/10.2.1");
        assert_eq!(row.homepage, "https://fmt.dev");
        assert_eq!(row.license, "MIT");
    }

    #[test]
    fn test_row_from_node_without_metadata() {
        let node = DependencyNode::new(
            "internal/0.1",
            None,
            None,
            PackageType::HeaderLibrary,
            BuildContext::Host,
        );

        let row = ReportRow::from_node(&node);
        assert_eq!(row.homepage, ABSENT_VALUE);
        assert_eq!(row.license, ABSENT_VALUE);
    }

    #[test]
    fn test_row_from_node_with_license_list() {
        let node = DependencyNode::new(
            "openssl/3.2.0",
            None,
            Some(LicenseField::Multiple(vec![
                "Apache-2.0".to_string(),
                "OpenSSL".to_string(),
            ])),
            PackageType::SharedLibrary,
            BuildContext::Host,
        );

        let row = ReportRow::from_node(&node);
        assert_eq!(row.license, r#"["Apache-2.0", "OpenSSL"]"#);
    }
}
