//! Authenticated user identity.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The user behind an authenticated session.
///
/// An `Identity` is constructed whole from a successful provider response and
/// only ever exists inside [`AuthState::Authenticated`](crate::AuthState); a
/// session never holds an email without being considered authenticated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    /// Opaque provider metadata (e.g. `full_name`)
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl Identity {
    /// Create an identity with no provider metadata
    pub fn new(email: String) -> Self {
        Self {
            email,
            metadata: Map::new(),
        }
    }

    /// Create an identity carrying the provider's metadata map
    pub fn with_metadata(email: String, metadata: Map<String, Value>) -> Self {
        Self { email, metadata }
    }

    /// Display name from provider metadata, when the provider supplied one
    pub fn display_name(&self) -> Option<&str> {
        self.metadata.get("full_name").and_then(Value::as_str)
    }
}
