use super::DependencyNode;

/// DependencyGraph aggregate holding every node reported by the resolver
///
/// Nodes are kept in the order the resolver emitted them; that order is
/// what "first occurrence" means during deduplication.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<(String, DependencyNode)>,
}

impl DependencyGraph {
    pub fn new(nodes: Vec<(String, DependencyNode)>) -> Self {
        Self { nodes }
    }

    /// Nodes in graph order
    pub fn nodes(&self) -> impl Iterator<Item = &DependencyNode> {
        self.nodes.iter().map(|(_, node)| node)
    }

    pub fn get(&self, node_id: &str) -> Option<&DependencyNode> {
        self.nodes
            .iter()
            .find(|(id, _)| id == node_id)
            .map(|(_, node)| node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_report::domain::{BuildContext, PackageType};

    fn node(reference: &str) -> DependencyNode {
        DependencyNode::new(
            reference,
            None,
            None,
            PackageType::StaticLibrary,
            BuildContext::Host,
        )
    }

    #[test]
    fn test_dependency_graph_preserves_order() {
        let graph = DependencyGraph::new(vec![
            ("2".to_string(), node("b/1.0")),
            ("1".to_string(), node("a/1.0")),
        ]);

        let refs: Vec<&str> = graph.nodes().map(|n| n.reference()).collect();
        assert_eq!(refs, vec!["b/1.0", "a/1.0"]);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_dependency_graph_get() {
        let graph = DependencyGraph::new(vec![("7".to_string(), node("zlib/1.3"))]);
        assert_eq!(graph.get("7").map(|n| n.reference()), Some("zlib/1.3"));
        assert!(graph.get("8").is_none());
    }

    #[test]
    fn test_dependency_graph_empty() {
        let graph = DependencyGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
    }
}
