use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Invalid profile name: {0:?}")]
    InvalidProfileName(String),

    #[error("Failed to decode profile at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported profile format version: found {found}, supported up to {supported}")]
    UnsupportedFormatVersion { found: u32, supported: u32 },

    #[error("Score for profile '{profile}' is not a finite number: {score}")]
    NonFiniteScore { profile: String, score: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error means "no stored profile" rather than a failure
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::ProfileNotFound(_) => true,
            Error::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
