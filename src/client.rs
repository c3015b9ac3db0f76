//! Client facade
//!
//! Wires the session context, HTTP client, and gateways together so an
//! application embeds one object. Construction is cheap; `initialize` must
//! run once at startup to resolve the persisted session before any screen
//! renders.

use crate::auth::AuthGateway;
use crate::config::Config;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::resources::{EventsApi, RemindersApi, TasksApi};
use crate::session::{FileStore, SessionContext, SessionStore};
use std::sync::Arc;

/// Everything a consumer needs to talk to the backend.
pub struct DaymarkClient {
    session: Arc<SessionContext>,
    pub auth: AuthGateway,
    pub tasks: TasksApi,
    pub events: EventsApi,
    pub reminders: RemindersApi,
}

impl DaymarkClient {
    /// Build a client over an explicit session store.
    pub fn new(config: Config, store: Arc<dyn SessionStore>) -> Self {
        let session = Arc::new(SessionContext::new(store));
        let http = Arc::new(HttpClient::new(config, session.clone()));
        Self {
            auth: AuthGateway::new(http.clone(), session.clone()),
            tasks: TasksApi::new(http.clone()),
            events: EventsApi::new(http.clone()),
            reminders: RemindersApi::new(http),
            session,
        }
    }

    /// Build a client persisting its session in the platform data directory.
    pub fn with_file_store(config: Config) -> Result<Self, ApiError> {
        let store = Arc::new(FileStore::open()?);
        Ok(Self::new(config, store))
    }

    /// Resolve the persisted session into an authenticated or unauthenticated
    /// state. Call once at startup, before rendering anything session-gated.
    pub async fn initialize(&self) {
        self.session.initialize().await;
    }

    /// Observable session state shared with the gateways.
    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }
}
