// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Why the article document could not be turned into an `ArticleSet`.
/// Every variant is recovered by the loader as "no data".
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed article data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("loader thread exited without a result")]
    Disconnected,
}

/// Rejected `--data` value.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("empty data source")]
    Empty,

    #[error("unsupported URL scheme `{0}` (expected http, https or file)")]
    Scheme(String),

    #[error("file URL has no local path: {0}")]
    FilePath(String),
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid log filter: {0}")]
    Filter(String),

    #[error("cannot open log file: {0}")]
    File(#[from] io::Error),

    #[error("logger already installed: {0}")]
    Install(String),
}
