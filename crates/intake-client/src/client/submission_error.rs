use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from the table store's insert operation
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Store unreachable: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Constraint violation (code {code}): {message} {location}")]
    Constraint {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Store rejected the row (status {status}): {message} {location}")]
    Rejected {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed store acknowledgment: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },
}

impl SubmissionError {
    /// Create a constraint-violation error
    #[track_caller]
    pub fn constraint<S: Into<String>>(code: S, message: S) -> Self {
        SubmissionError::Constraint {
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a rejected-row error
    #[track_caller]
    pub fn rejected<S: Into<String>>(status: u16, message: S) -> Self {
        SubmissionError::Rejected {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a malformed-acknowledgment error
    #[track_caller]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        SubmissionError::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for SubmissionError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type SubmissionResult<T> = std::result::Result<T, SubmissionError>;
