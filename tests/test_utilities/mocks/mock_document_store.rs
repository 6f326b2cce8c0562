use conan_license_report::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory DocumentStore; clones share the same documents
#[derive(Default, Clone)]
pub struct MockDocumentStore {
    pub documents: Arc<Mutex<HashMap<PathBuf, String>>>,
    pub write_count: Arc<Mutex<usize>>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, path: &str, content: &str) -> Self {
        self.documents
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.documents.lock().unwrap().get(Path::new(path)).cloned()
    }

    pub fn writes(&self) -> usize {
        *self.write_count.lock().unwrap()
    }
}

impl DocumentStore for MockDocumentStore {
    fn read_document(&self, path: &Path) -> Result<String> {
        self.documents
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock document not found: {}", path.display()))
    }

    fn write_document(&self, path: &Path, content: &str) -> Result<WriteOutcome> {
        let mut documents = self.documents.lock().unwrap();
        if documents.get(path).map(String::as_str) == Some(content) {
            return Ok(WriteOutcome::Unchanged);
        }
        documents.insert(path.to_path_buf(), content.to_string());
        *self.write_count.lock().unwrap() += 1;
        Ok(WriteOutcome::Written)
    }
}
