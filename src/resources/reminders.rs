//! Reminder API client
//!
//! Reminders carry a `reminder_date` the calendar grid matches against; see
//! `crate::calendar`.

use super::types::{Reminder, ReminderDraft, ReminderPatch};
use crate::error::ApiError;
use crate::http::HttpClient;
use std::sync::Arc;
use uuid::Uuid;

pub struct RemindersApi {
    http: Arc<HttpClient>,
}

impl RemindersApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// All non-archived reminders.
    pub async fn list(&self) -> Result<Vec<Reminder>, ApiError> {
        self.http.get("/reminders").await
    }

    /// Archived reminders, for the archive screen.
    pub async fn list_archived(&self) -> Result<Vec<Reminder>, ApiError> {
        self.http.get("/reminders/archived").await
    }

    pub async fn create(&self, draft: &ReminderDraft) -> Result<Reminder, ApiError> {
        self.http.post("/reminders", draft).await
    }

    pub async fn update(&self, id: Uuid, patch: &ReminderPatch) -> Result<Reminder, ApiError> {
        self.http.put(&format!("/reminders/{id}"), patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.http.delete(&format!("/reminders/{id}")).await
    }

    /// Mark a reminder done or not done.
    pub async fn set_completed(&self, id: Uuid, done: bool) -> Result<Reminder, ApiError> {
        let patch = ReminderPatch {
            is_completed: Some(done),
            ..Default::default()
        };
        self.update(id, &patch).await
    }

    pub async fn archive(&self, id: Uuid) -> Result<Reminder, ApiError> {
        self.http.post_empty(&format!("/reminders/{id}/archive")).await
    }

    pub async fn restore(&self, id: Uuid) -> Result<Reminder, ApiError> {
        self.http.post_empty(&format!("/reminders/{id}/restore")).await
    }
}
