use crate::ports::outbound::GraphSource;
use crate::shared::error::LicenseReportError;
use crate::shared::security::validate_readable_file;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// GraphFileReader adapter for reading a previously persisted graph
///
/// Implements the GraphSource port for `--graph-file`: the JSON written by
/// an earlier resolver run (or produced elsewhere in the pipeline) is used
/// as-is and the resolver is not invoked.
pub struct GraphFileReader {
    graph_path: PathBuf,
}

impl GraphFileReader {
    pub fn new(graph_path: PathBuf) -> Self {
        Self { graph_path }
    }
}

impl GraphSource for GraphFileReader {
    fn fetch_graph(&self) -> Result<String> {
        let graph_file_error = |details: String| LicenseReportError::GraphFileError {
            path: self.graph_path.clone(),
            details,
        };

        if !self.graph_path.exists() {
            return Err(graph_file_error("Graph file does not exist".to_string()).into());
        }

        // Read graph content with security checks
        validate_readable_file(&self.graph_path, "graph file")
            .and_then(|_| fs::read_to_string(&self.graph_path).map_err(anyhow::Error::from))
            .map_err(|e| graph_file_error(e.to_string()).into())
    }

    fn describe(&self) -> String {
        self.graph_path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_graph_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let graph_path = temp_dir.path().join("graph.json");
        fs::write(&graph_path, r#"{"nodes": {}}"#).unwrap();

        let reader = GraphFileReader::new(graph_path);
        let content = reader.fetch_graph().unwrap();

        assert_eq!(content, r#"{"nodes": {}}"#);
    }

    #[test]
    fn test_read_graph_file_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let reader = GraphFileReader::new(temp_dir.path().join("graph.json"));
        let err = reader.fetch_graph().unwrap_err();

        assert!(err.to_string().contains("Graph file does not exist"));
        let report_error = err.downcast_ref::<LicenseReportError>().unwrap();
        assert!(matches!(report_error, LicenseReportError::GraphFileError { .. }));
        assert!(report_error.is_resolution_error());
        assert!(!err.to_string().contains("Run the command manually"));
    }

    #[test]
    fn test_read_graph_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();

        let reader = GraphFileReader::new(temp_dir.path().to_path_buf());
        let err = reader.fetch_graph().unwrap_err();

        assert!(err.to_string().contains("not a regular file"));
    }

    #[test]
    fn test_describe_uses_path() {
        let reader = GraphFileReader::new(PathBuf::from("build/graph.json"));
        assert_eq!(reader.describe(), "build/graph.json");
    }
}
