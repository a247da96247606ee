//! Error taxonomy for the schedule and its storage.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::utils::AtomicError;

#[derive(Error, Debug)]
pub enum StoreError {
    /// File absent on load, or unknown/empty id on delete
    #[error("Not found: {0}")]
    NotFound(String),

    /// File present but not parseable as the expected structure
    #[error("Corrupt data in {}: {source}", .path.display())]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Directory creation, write or rename failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

impl From<AtomicError> for StoreError {
    fn from(e: AtomicError) -> Self {
        StoreError::Io(e.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
