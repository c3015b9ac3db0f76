//! Event API client

use super::types::{Event, EventDraft, EventPatch};
use crate::error::ApiError;
use crate::http::HttpClient;
use std::sync::Arc;
use uuid::Uuid;

pub struct EventsApi {
    http: Arc<HttpClient>,
}

impl EventsApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// All non-archived events.
    pub async fn list(&self) -> Result<Vec<Event>, ApiError> {
        self.http.get("/events").await
    }

    /// Archived events, for the archive screen.
    pub async fn list_archived(&self) -> Result<Vec<Event>, ApiError> {
        self.http.get("/events/archived").await
    }

    pub async fn create(&self, draft: &EventDraft) -> Result<Event, ApiError> {
        self.http.post("/events", draft).await
    }

    pub async fn update(&self, id: Uuid, patch: &EventPatch) -> Result<Event, ApiError> {
        self.http.put(&format!("/events/{id}"), patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.http.delete(&format!("/events/{id}")).await
    }

    pub async fn archive(&self, id: Uuid) -> Result<Event, ApiError> {
        self.http.post_empty(&format!("/events/{id}/archive")).await
    }

    pub async fn restore(&self, id: Uuid) -> Result<Event, ApiError> {
        self.http.post_empty(&format!("/events/{id}/restore")).await
    }
}
