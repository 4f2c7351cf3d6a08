use std::time::SystemTimeError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parsing error: {0}")]
    Parse(String),
    #[error("Storage error: {0} {1}")]
    Storage(String, String),
    #[error("Profile with id {0} already exists")]
    DuplicateId(String),
    #[error("Invalid profile id: {0:?}")]
    InvalidId(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// Storage read or write failure, as opposed to a caller mistake.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            StoreError::Io(_) | StoreError::Parse(_) | StoreError::Storage(..)
        )
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<SystemTimeError> for StoreError {
    fn from(value: SystemTimeError) -> Self {
        Self::Other(anyhow::anyhow!(value.to_string()))
    }
}
