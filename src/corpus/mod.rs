pub mod export;
pub mod index;
pub mod loader;

pub use export::{export, export_to_path, ExportError};
pub use index::{CorpusIndex, CorpusSummary, GroupStats, SourceDocument};
pub use loader::{CorpusLoader, LoadError};
