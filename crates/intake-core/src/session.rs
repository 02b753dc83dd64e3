//! Per-session authentication state.

use crate::Identity;

/// Exactly one of two states; there is no partially-authenticated state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

/// The single identity slot for one interactive session.
///
/// Starts `Anonymous`. The only transition is [`promote`](Session::promote),
/// driven by a successful login; no transition out of `Authenticated` is
/// defined (logout is out of scope). Failed logins leave the state untouched.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: AuthState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, AuthState::Authenticated(_))
    }

    /// The current identity, if the session is authenticated
    pub fn identity(&self) -> Option<&Identity> {
        match &self.state {
            AuthState::Authenticated(identity) => Some(identity),
            AuthState::Anonymous => None,
        }
    }

    /// Transition `Anonymous -> Authenticated` after a successful login
    pub fn promote(&mut self, identity: Identity) {
        self.state = AuthState::Authenticated(identity);
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }
}
