//! Session state machine
//!
//! `SessionContext` is the one place session state changes. It starts in
//! `Initializing`, resolves to `Authenticated` or `Unauthenticated` from the
//! persisted session, and thereafter moves only through the transitions the
//! auth gateway and HTTP client drive:
//!
//! - `Unauthenticated -> Authenticated`: login / register / OTP verify /
//!   guest login
//! - `Authenticated -> Unauthenticated`: logout, or an unrecoverable token
//!   refresh
//! - `Authenticated -> Authenticated`: profile update (user replaced) or
//!   token refresh (token replaced)
//!
//! Consumers read snapshots; they must treat `Initializing` as a distinct
//! render state and not invoke gateway operations from it.

use super::{PersistedSession, SessionStore};
use crate::auth::types::User;
use crate::error::ApiError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Observable session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Persisted session not yet examined; show a loading indicator
    Initializing,
    /// A valid session is active
    Authenticated(User),
    /// No session; show the unauthenticated entry point
    Unauthenticated,
}

/// Shared session state, injected into the HTTP client and auth gateway.
pub struct SessionContext {
    persisted: PersistedSession,
    state: RwLock<SessionState>,
}

impl SessionContext {
    /// Create a context in the `Initializing` state over the given store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            persisted: PersistedSession::new(store),
            state: RwLock::new(SessionState::Initializing),
        }
    }

    /// Resolve `Initializing` from the persisted session.
    ///
    /// A valid pair becomes `Authenticated`; anything else (missing entries,
    /// or a corrupt pair that `PersistedSession::load` already cleaned up)
    /// becomes `Unauthenticated`.
    pub async fn initialize(&self) {
        let next = match self.persisted.load() {
            Some(session) => {
                tracing::debug!(user = %session.user.email, "restored persisted session");
                SessionState::Authenticated(session.user)
            }
            None => SessionState::Unauthenticated,
        };
        *self.state.write().await = next;
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// The current user, when authenticated.
    pub async fn current_user(&self) -> Option<User> {
        match &*self.state.read().await {
            SessionState::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    /// Whether the persisted session has not been examined yet.
    pub async fn is_loading(&self) -> bool {
        *self.state.read().await == SessionState::Initializing
    }

    /// Current access token, read at request-send time.
    pub(crate) fn access_token(&self) -> Option<String> {
        self.persisted.access_token()
    }

    /// Persist a fresh `{token, user}` pair and become `Authenticated`.
    ///
    /// Also the overwrite path: establishing over an active session replaces
    /// it, which is how guest login over an existing session behaves.
    pub(crate) async fn establish(&self, token: &str, user: User) -> Result<(), ApiError> {
        self.persisted.establish(token, &user)?;
        *self.state.write().await = SessionState::Authenticated(user);
        Ok(())
    }

    /// Replace only the token (refresh); state and user are untouched.
    pub(crate) fn replace_token(&self, token: &str) -> Result<(), ApiError> {
        self.persisted.replace_token(token)
    }

    /// Replace only the user record (profile update); token is untouched.
    pub(crate) async fn replace_user(&self, user: User) -> Result<(), ApiError> {
        self.persisted.replace_user(&user)?;
        let mut state = self.state.write().await;
        if matches!(&*state, SessionState::Authenticated(_)) {
            *state = SessionState::Authenticated(user);
        }
        Ok(())
    }

    /// Tear the session down: clear storage and become `Unauthenticated`.
    pub(crate) async fn clear(&self) {
        self.persisted.clear();
        *self.state.write().await = SessionState::Unauthenticated;
    }
}
