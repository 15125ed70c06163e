//! # Registry Errors
//!
//! Every failure the parser and the exporters can produce. None of them are
//! retried: the caller decides whether a bad group aborts the run or is
//! skipped, and I/O failures always end it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// The two header lines of a group name different organizations.
    #[error("group {group:03} (line {line:03}): company mismatch, '{first}' != '{second}'")]
    CompanyMismatch {
        group: usize,
        line: usize,
        first: String,
        second: String,
    },

    /// A group has too few lines for the registry layout (2, or 5 and more).
    #[error("group {group:03} (line {line:03}): incomplete group with {found} line(s)")]
    IncompleteGroup {
        group: usize,
        line: usize,
        found: usize,
    },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write JSON to {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write CSV to {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl RegistryError {
    /// Errors caused by the content of a single group, as opposed to the
    /// file system. Only these may be skipped.
    pub fn is_group_error(&self) -> bool {
        matches!(
            self,
            RegistryError::CompanyMismatch { .. } | RegistryError::IncompleteGroup { .. }
        )
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RegistryError::Io {
            path: path.into(),
            source,
        }
    }
}
