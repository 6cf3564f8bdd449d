//! Crate-level error type for the I/O seams: configuration, loading and
//! export. Normalization and ranking never fail.

use thiserror::Error;

use crate::config::ConfigError;
use crate::corpus::{ExportError, LoadError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
