use crate::license_report::domain::{DependencyGraph, DependencyNode};
use crate::shared::error::LicenseReportError;
use crate::shared::Result;
use serde_json::{Map, Value};

/// GraphParser service turning a resolver payload into a DependencyGraph
///
/// Accepts both a bare `{"nodes": {...}}` document and the Conan 2 layout
/// `{"graph": {"nodes": {...}}}`. Node order follows the order of the keys
/// in the payload.
pub struct GraphParser;

impl GraphParser {
    /// Parses a JSON payload
    ///
    /// # Arguments
    /// * `payload` - Raw JSON text
    /// * `source_name` - Where the payload came from, used in error messages
    ///
    /// # Errors
    /// Returns [`LicenseReportError::GraphParseError`] if the JSON is malformed,
    /// has no `nodes` object, or any node cannot be read. No partial graph is
    /// returned.
    pub fn parse(payload: &str, source_name: &str) -> Result<DependencyGraph> {
        let parse_error = |details: String| LicenseReportError::GraphParseError {
            source_name: source_name.to_string(),
            details,
        };

        let document: Value =
            serde_json::from_str(payload).map_err(|e| parse_error(e.to_string()))?;

        let nodes = Self::locate_nodes(&document)
            .ok_or_else(|| parse_error("no `nodes` object found".to_string()))?;

        let mut entries = Vec::with_capacity(nodes.len());
        for (node_id, raw_node) in nodes {
            let node: DependencyNode = serde_json::from_value(raw_node.clone())
                .map_err(|e| parse_error(format!("node `{}`: {}", node_id, e)))?;
            entries.push((node_id.clone(), node));
        }

        Ok(DependencyGraph::new(entries))
    }

    fn locate_nodes(document: &Value) -> Option<&Map<String, Value>> {
        document
            .get("nodes")
            .or_else(|| document.get("graph").and_then(|graph| graph.get("nodes")))
            .and_then(Value::as_object)
    }
}
