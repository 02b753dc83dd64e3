use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from the identity provider surface
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credentials: {message} {location}")]
    Invalid {
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider rejected the request: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider unreachable: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Malformed provider response: {message} {location}")]
    Malformed {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Create an invalid-input error
    #[track_caller]
    pub fn invalid<S: Into<String>>(message: S) -> Self {
        AuthError::Invalid {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a provider-rejected error
    #[track_caller]
    pub fn rejected<S: Into<String>>(message: S) -> Self {
        AuthError::Rejected {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a malformed-response error
    #[track_caller]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        AuthError::Malformed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AuthError::Transport {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<intake_core::CoreError> for AuthError {
    #[track_caller]
    fn from(err: intake_core::CoreError) -> Self {
        AuthError::invalid(err.message().to_string())
    }
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;
