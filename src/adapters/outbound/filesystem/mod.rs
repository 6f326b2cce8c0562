/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;

pub use file_reader::GraphFileReader;
pub use file_writer::{FileSystemDocumentStore, StdoutPresenter};
