// src/error.rs
use std::{error::Error as StdError, io, path::PathBuf};

use thiserror::Error;

/// Everything that can abort a collector run. None of these are retried.
#[derive(Debug, Error)]
pub enum CollectError {
    /// Connection failure or non-success status. Boxed so any `Fetch`
    /// implementation can report one.
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("{url}: item {index}: {what} not found")]
    Structure {
        url: String,
        index: usize,
        what: &'static str,
    },

    #[error("bad price text {text:?}")]
    Price { text: String },

    #[error(transparent)]
    Rating(#[from] crate::model::UnknownRating),

    #[error("bad URL {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid selector {0:?}")]
    Selector(&'static str),

    #[error("writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl CollectError {
    pub fn transport(url: impl Into<String>, source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        CollectError::Transport { url: url.into(), source: source.into() }
    }
}

/// Reasons the report cannot show a table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Data not found at {0}. Please run the collector first.")]
    Missing(PathBuf),

    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("row {row}: {reason}")]
    Record { row: usize, reason: String },
}

impl LoadError {
    /// The missing-file case is the only one the report treats as a
    /// normal empty state rather than an error.
    pub fn is_missing(&self) -> bool {
        matches!(self, LoadError::Missing(_))
    }
}
