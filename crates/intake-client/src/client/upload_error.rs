use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from the blob store surface, plus the local staging step
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Blob store unreachable: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Blob store rejected the upload (status {status}): {message} {location}")]
    Rejected {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error staging {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed blob store response: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },
}

impl UploadError {
    /// Create a rejected-upload error
    #[track_caller]
    pub fn rejected<S: Into<String>>(status: u16, message: S) -> Self {
        UploadError::Rejected {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a malformed-response error
    #[track_caller]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        UploadError::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap a local staging IO failure
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        UploadError::Io { path, source }
    }
}

impl From<reqwest::Error> for UploadError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        UploadError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type UploadResult<T> = std::result::Result<T, UploadError>;
