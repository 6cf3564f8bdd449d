use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Path-like document identifier, e.g. `training/1042`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

#[derive(Debug, Error)]
pub enum DocumentIdError {
    #[error("Source path is outside the corpus root")]
    OutsideRoot,
    #[error("Path involves invalid UTF-8")]
    InvalidUtf8,
}

impl DocumentId {
    /// Wrap an identifier supplied by a corpus source as-is.
    pub fn new(id: impl Into<String>) -> Self {
        DocumentId(id.into())
    }

    /// Create a DocumentId from a file path relative to the corpus root.
    pub fn from_path(root: &Path, source: &Path) -> Result<Self, DocumentIdError> {
        let rel = source
            .strip_prefix(root)
            .map_err(|_| DocumentIdError::OutsideRoot)?;

        let normalized = normalize_path(rel)?;

        Ok(DocumentId(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading path segment, used as the reporting group.
    ///
    /// An id without a separator is its own group.
    pub fn group(&self) -> &str {
        self.0.split('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        DocumentId::new(s)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        DocumentId(s)
    }
}

/// Separators become `/` and a leading `./` is dropped. Case is preserved.
fn normalize_path(path: &Path) -> Result<String, DocumentIdError> {
    let s = path.to_str().ok_or(DocumentIdError::InvalidUtf8)?;

    let normalized = s.replace('\\', "/").trim_start_matches("./").to_string();

    Ok(normalized)
}

/// Content hash version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(String);

impl DocumentVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        DocumentVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
