use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ScanError {
    #[error("ps not found. A process-listing tool is required to detect fossilize_replay.")]
    NotFound,

    #[error("Failed to run ps: {0}")]
    Spawn(std::io::Error),
}

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("Failed to fetch app list: {0}")]
    Request(ureq::Error),

    #[error("App list request returned HTTP {0}")]
    Status(u16),

    #[error("Failed to read app list response: {0}")]
    Body(std::io::Error),

    #[error("Invalid app list JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadCache {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create cache directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteCache {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl From<ureq::Error> for CatalogError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => CatalogError::Status(code),
            other => CatalogError::Request(other),
        }
    }
}
