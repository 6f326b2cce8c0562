mod document_splicer;
mod graph_parser;
mod node_filter;

pub use document_splicer::{DocumentSplicer, MarkerNotFound, MarkerRegion, DEFAULT_MARKER};
pub use graph_parser::GraphParser;
pub use node_filter::{FilterMode, NodeFilter};
