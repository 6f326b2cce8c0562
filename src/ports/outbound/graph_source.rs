use crate::shared::Result;

/// GraphSource port for obtaining the resolved dependency graph
///
/// This port abstracts where the graph payload comes from: a live run of
/// the package manager's resolver, or a graph file persisted earlier.
pub trait GraphSource {
    /// Returns the raw graph payload (JSON text)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The resolver cannot be started or exits unsuccessfully
    /// - The graph file cannot be read
    fn fetch_graph(&self) -> Result<String>;

    /// Human-readable name of the source, used in progress and error messages
    fn describe(&self) -> String;
}

impl<T: GraphSource + ?Sized> GraphSource for Box<T> {
    fn fetch_graph(&self) -> Result<String> {
        (**self).fetch_graph()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
