//! Login and signup mediation around the per-session identity slot.

use intake_client::{AuthResult, BackendClient};
use intake_core::{Identity, Session, validate_credentials};

use log::info;

/// Holds the session's identity slot and mediates credential entry.
///
/// Only a successful [`login`](SessionManager::login) writes the slot; a
/// failed login or signup leaves it untouched, so callers can retry without
/// any cleanup.
#[derive(Default)]
pub struct SessionManager {
    session: Session,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Authenticate against the identity provider and promote the session.
    ///
    /// Inputs are validated before anything reaches the provider. On any
    /// failure the session stays as it was; there is no automatic retry.
    pub async fn login(
        &mut self,
        client: &BackendClient,
        email: &str,
        password: &str,
    ) -> AuthResult<Identity> {
        validate_credentials(email, password)?;

        let identity = client.sign_in_with_password(email, password).await?;
        self.session.promote(identity.clone());
        info!("session authenticated as {}", identity.email);

        Ok(identity)
    }

    /// Register a new user.
    ///
    /// Registration and first login are distinct events: a successful signup
    /// does not authenticate the session. An explicit `login` is required
    /// afterwards.
    pub async fn signup(
        &self,
        client: &BackendClient,
        email: &str,
        password: &str,
    ) -> AuthResult<Identity> {
        validate_credentials(email, password)?;

        let identity = client.sign_up(email, password).await?;
        info!("registered {}", identity.email);

        Ok(identity)
    }
}
