//! Puzzle storage
//!
//! The export path reads exactly one record per request. `DirectoryStore`
//! keeps records as `<id>.json` files holding a `DbPuzzle`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::parser::DbPuzzle;

/// Source of stored puzzle records
pub trait PuzzleStore {
    /// Fetch a record; `Ok(None)` when no puzzle has this id
    fn get_puzzle(&self, id: &str) -> Result<Option<DbPuzzle>, StoreError>;
}

/// Store backed by a directory of JSON files
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }
}

impl PuzzleStore for DirectoryStore {
    fn get_puzzle(&self, id: &str) -> Result<Option<DbPuzzle>, StoreError> {
        let path = self.record_path(id);
        log::debug!("Reading puzzle {} from {}", id, path.display());

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Read {
                    id: id.to_string(),
                    source,
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                id: id.to_string(),
                source,
            })
    }
}
