//! Flat text export: one block per document.
//!
//! ```text
//! Document ID: <id>
//! <content>
//!
//! ```
//!
//! Content is written verbatim, so a body line starting with `Document ID:`
//! makes the artifact ambiguous to re-parse.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::index::CorpusIndex;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write export {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write every document in corpus order. Returns the number of records.
pub fn export<W: Write>(corpus: &CorpusIndex, writer: &mut W) -> io::Result<usize> {
    for doc in corpus.documents() {
        writeln!(writer, "Document ID: {}", doc.id)?;
        write!(writer, "{}\n\n", doc.content)?;
    }
    writer.flush()?;
    Ok(corpus.len())
}

pub fn export_to_path(corpus: &CorpusIndex, path: &Path) -> Result<usize, ExportError> {
    let wrap = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    let written = export(corpus, &mut writer).map_err(wrap)?;

    tracing::info!("Exported {} documents to {:?}", written, path);
    Ok(written)
}
