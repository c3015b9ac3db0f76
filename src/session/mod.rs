//! Session layer
//!
//! Owns the persisted `{access token, user}` pair and the in-process session
//! state machine built on top of it.
//!
//! # Key Components
//!
//! - `store`: the `SessionStore` key-value interface and its memory/file
//!   backends
//! - `PersistedSession`: reads and writes the token and user record as one
//!   logical unit, never leaving a partial pair behind
//! - `context`: the `SessionContext` state machine consumers observe
//!
//! # Invariant
//!
//! A user record is present if and only if an access token is present. Any
//! partial or unparsable pair found in storage is treated as corruption and
//! cleared on load.

pub mod context;
pub mod store;

pub use context::{SessionContext, SessionState};
pub use store::{FileStore, MemoryStore, SessionStore};

use crate::auth::types::User;
use crate::error::ApiError;
use std::sync::Arc;

/// Storage key for the access token entry
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the serialized user entry
pub const USER_KEY: &str = "user";

/// The pair that denotes an authenticated client.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

/// Unit-consistent view over a `SessionStore`.
///
/// All writes touch both entries or neither; `load` clears the store when it
/// finds a partial or corrupt pair instead of propagating an error.
#[derive(Clone)]
pub struct PersistedSession {
    store: Arc<dyn SessionStore>,
}

impl PersistedSession {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Current access token, if any. Read on every outbound request.
    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).ok().flatten()
    }

    /// Load the persisted session.
    ///
    /// Returns `None` when no session is stored. A token without a user, a
    /// user without a token, or a user record that fails to parse all count
    /// as corruption: both entries are cleared and `None` is returned.
    pub fn load(&self) -> Option<Session> {
        let token = self.store.get(ACCESS_TOKEN_KEY).ok().flatten();
        let raw_user = self.store.get(USER_KEY).ok().flatten();

        match (token, raw_user) {
            (Some(access_token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(Session { access_token, user }),
                Err(err) => {
                    tracing::warn!(%err, "stored user record is corrupt, clearing session");
                    self.clear();
                    None
                }
            },
            (None, None) => None,
            _ => {
                tracing::warn!("partial session found in storage, clearing");
                self.clear();
                None
            }
        }
    }

    /// Persist a new token and user together.
    pub fn establish(&self, access_token: &str, user: &User) -> Result<(), ApiError> {
        let raw = serde_json::to_string(user)
            .map_err(|err| ApiError::storage(err.to_string()))?;
        self.store.set(ACCESS_TOKEN_KEY, access_token)?;
        self.store.set(USER_KEY, &raw)?;
        Ok(())
    }

    /// Replace the token, leaving the user record untouched (refresh).
    pub fn replace_token(&self, access_token: &str) -> Result<(), ApiError> {
        self.store.set(ACCESS_TOKEN_KEY, access_token)?;
        Ok(())
    }

    /// Replace the user record, leaving the token untouched (profile update).
    pub fn replace_user(&self, user: &User) -> Result<(), ApiError> {
        let raw = serde_json::to_string(user)
            .map_err(|err| ApiError::storage(err.to_string()))?;
        self.store.set(USER_KEY, &raw)?;
        Ok(())
    }

    /// Remove both entries. Best-effort: teardown must never fail.
    pub fn clear(&self) {
        if let Err(err) = self.store.remove(ACCESS_TOKEN_KEY) {
            tracing::warn!(%err, "failed to remove access token entry");
        }
        if let Err(err) = self.store.remove(USER_KEY) {
            tracing::warn!(%err, "failed to remove user entry");
        }
    }
}
