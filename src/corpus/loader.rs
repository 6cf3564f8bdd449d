//! Directory-backed corpus source.
//!
//! Walks a corpus directory in file-name order and yields one
//! [`SourceDocument`] per readable file. Symlinked files are followed.
//! Unreadable files are logged and skipped so one bad file never aborts
//! ingestion.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use super::index::{CorpusIndex, SourceDocument};
use crate::normalize::Normalizer;
use crate::types::identifiers::DocumentId;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Corpus directory does not exist: {0}")]
    MissingRoot(PathBuf),
    #[error("Corpus path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct CorpusLoader {
    root: PathBuf,
    skip_hidden: bool,
    min_words: usize,
}

impl CorpusLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            skip_hidden: true,
            min_words: 0,
        }
    }

    /// Skip dot files and dot directories such as `.DS_Store` (default on).
    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    /// Skip files with no more than `min` whitespace-delimited words. 0 keeps all.
    pub fn min_words(mut self, min: usize) -> Self {
        self.min_words = min;
        self
    }

    /// Read every file under the root, failing only if the root itself is unusable.
    pub fn try_load(&self) -> Result<Vec<SourceDocument>, LoadError> {
        self.try_load_with(|path| fs::read(path))
    }

    fn try_load_with<F>(&self, read: F) -> Result<Vec<SourceDocument>, LoadError>
    where
        F: Fn(&Path) -> io::Result<Vec<u8>>,
    {
        if !self.root.exists() {
            return Err(LoadError::MissingRoot(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(LoadError::NotADirectory(self.root.clone()));
        }

        let mut sources = Vec::new();
        let mut skipped = 0usize;

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_visit(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            match self.read_entry(entry.path(), &read) {
                Some(source) => sources.push(source),
                None => skipped += 1,
            }
        }

        if sources.is_empty() {
            tracing::warn!("No readable text files found in {:?}", self.root);
        } else {
            tracing::info!(
                "Loaded {} documents from {:?} ({} skipped)",
                sources.len(),
                self.root,
                skipped
            );
        }

        Ok(sources)
    }

    /// Like [`try_load`](Self::try_load), but an unusable root is logged and
    /// yields no documents.
    pub fn load(&self) -> Vec<SourceDocument> {
        self.try_load().unwrap_or_else(|e| {
            tracing::error!("{}", e);
            Vec::new()
        })
    }

    pub fn load_index(&self, normalizer: Normalizer) -> CorpusIndex {
        CorpusIndex::build(self.load(), normalizer)
    }

    fn should_visit(&self, entry: &DirEntry) -> bool {
        // Never filter the root directory
        if entry.depth() == 0 {
            return true;
        }
        if !self.skip_hidden {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .map(|name| !name.starts_with('.'))
            .unwrap_or(true)
    }

    fn read_entry<F>(&self, path: &Path, read: F) -> Option<SourceDocument>
    where
        F: Fn(&Path) -> io::Result<Vec<u8>>,
    {
        let id = match DocumentId::from_path(&self.root, path) {
            Ok(id) => id,
            Err(e) => {
                tracing::error!("Skipping file {:?}: {}", path, e);
                return None;
            }
        };

        let bytes = match read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Error reading file {:?}: {}", path, e);
                return None;
            }
        };
        let text = String::from_utf8_lossy(&bytes).into_owned();

        if self.min_words > 0 && text.split_whitespace().count() <= self.min_words {
            tracing::debug!("Skipping short file {:?}", path);
            return None;
        }

        Some(SourceDocument { id, text })
    }
}
