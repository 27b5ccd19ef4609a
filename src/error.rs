use std::path::PathBuf;

use thiserror::Error;

use crate::parsers::timestamp::TimestampError;

/// Failures that can occur while collecting a day's conversations.
///
/// None of these abort a collection run. Each one is handled at the scope it
/// occurs in (a single line, a single file or a single project) and reported
/// through `tracing`.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("{what} not found: {}", .path.display())]
    MissingSource { what: &'static str, path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse line {line}: {source}")]
    RecordParse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Timestamp(#[from] TimestampError),
}

impl CollectError {
    pub(crate) fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead { path: path.into(), source }
    }
}
