//! Directory-backed document store.

use crate::error::{Error, Result};
use crate::model::Document;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::DocumentStore;

/// Reads documents from `<root>/<id>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a document id maps to.
    ///
    /// Ids containing path separators or parent references are rejected.
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        if id.is_empty() || id.contains(['/', '\\']) || id == "." || id == ".." {
            return Err(Error::Store(format!("invalid document id: {:?}", id)));
        }
        Ok(self.root.join(format!("{}.json", id)))
    }

    /// Ids of all `*.json` documents in the root directory, sorted.
    pub fn list_ids(&self) -> Result<Vec<String>> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Fetch a document using async file I/O.
    #[cfg(feature = "async")]
    pub async fn fetch_async(&self, id: &str) -> Result<Document> {
        let path = self.path_for(id)?;
        let data = tokio::fs::read(&path)
            .await
            .map_err(|e| not_found_or_io(id, e))?;
        crate::parse_slice(&data)
    }
}

impl DocumentStore for DirectoryStore {
    fn name(&self) -> &str {
        "directory"
    }

    fn fetch(&self, id: &str) -> Result<Document> {
        let path = self.path_for(id)?;
        log::debug!("loading document {:?} from {}", id, path.display());
        let data = fs::read(&path).map_err(|e| not_found_or_io(id, e))?;
        crate::parse_slice(&data)
    }

    fn contains(&self, id: &str) -> bool {
        self.path_for(id).map(|p| p.is_file()).unwrap_or(false)
    }
}

fn not_found_or_io(id: &str, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::DocumentNotFound(id.to_string())
    } else {
        Error::Io(err)
    }
}
