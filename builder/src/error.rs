use std::path::PathBuf;

use bee_harvester::ArchiveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Source file {} not found.", .0.display())]
    MissingInput(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    ReadArchive {
        path: PathBuf,
        #[source]
        source: ArchiveError,
    },
    #[error("failed to serialize enriched archive: {0}")]
    Serialize(#[from] ArchiveError),
    #[error("failed to write {}: {source:#}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}
