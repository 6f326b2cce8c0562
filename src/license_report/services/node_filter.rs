use crate::license_report::domain::{BuildContext, DependencyGraph, DependencyNode};
use std::collections::HashSet;

/// How strictly nodes are filtered before deduplication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Keep only shared, static and header libraries from the host context
    #[default]
    Strict,
    /// Keep every node; only deduplication applies
    Simple,
}

impl std::str::FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(FilterMode::Strict),
            "simple" => Ok(FilterMode::Simple),
            _ => Err(format!(
                "Invalid filter mode: {}. Please specify 'strict' or 'simple'",
                s
            )),
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterMode::Strict => write!(f, "strict"),
            FilterMode::Simple => write!(f, "simple"),
        }
    }
}

/// NodeFilter - reduces a dependency graph to the nodes shown in the report
///
/// Pure logic, no I/O. Deduplication is first-wins on the canonical
/// reference: a later node with the same key is dropped even if its
/// homepage or license differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeFilter {
    mode: FilterMode,
}

impl NodeFilter {
    pub fn new(mode: FilterMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Filters and deduplicates the graph's nodes, keeping graph order
    pub fn filter_graph(&self, graph: &DependencyGraph) -> Vec<DependencyNode> {
        self.apply(graph.nodes())
    }

    /// Filters and deduplicates any node sequence, keeping input order
    ///
    /// Applying the filter to its own output returns the same sequence.
    pub fn apply<'a, I>(&self, nodes: I) -> Vec<DependencyNode>
    where
        I: IntoIterator<Item = &'a DependencyNode>,
    {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut retained = Vec::new();

        for node in nodes {
            if !self.is_included(node) {
                continue;
            }
            if seen.insert(node.canonical_reference()) {
                retained.push(node.clone());
            }
        }

        retained
    }

    /// Checks whether a node passes the type/context rule of the current mode
    pub fn is_included(&self, node: &DependencyNode) -> bool {
        match self.mode {
            FilterMode::Simple => true,
            FilterMode::Strict => {
                node.package_type().is_redistributable_library()
                    && node.context() == BuildContext::Host
            }
        }
    }
}
