//! Task API client
//!
//! CRUD over `/tasks`. Normal listings exclude archived tasks; the archive
//! screen uses `list_archived`. All calls ride the shared `HttpClient`, so an
//! expired token is refreshed transparently.

use super::types::{Task, TaskDraft, TaskPatch};
use crate::error::ApiError;
use crate::http::HttpClient;
use std::sync::Arc;
use uuid::Uuid;

pub struct TasksApi {
    http: Arc<HttpClient>,
}

impl TasksApi {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// All non-archived tasks, ordered by hour slot by the backend.
    pub async fn list(&self) -> Result<Vec<Task>, ApiError> {
        self.http.get("/tasks").await
    }

    /// Non-archived tasks for one day (`YYYY-MM-DD`), for the day view.
    pub async fn list_for_date(&self, date: &str) -> Result<Vec<Task>, ApiError> {
        self.http.get(&format!("/tasks?date={date}")).await
    }

    /// Archived tasks, newest first.
    pub async fn list_archived(&self) -> Result<Vec<Task>, ApiError> {
        self.http.get("/tasks/archived").await
    }

    pub async fn create(&self, draft: &TaskDraft) -> Result<Task, ApiError> {
        self.http.post("/tasks", draft).await
    }

    pub async fn update(&self, id: Uuid, patch: &TaskPatch) -> Result<Task, ApiError> {
        self.http.put(&format!("/tasks/{id}"), patch).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        self.http.delete(&format!("/tasks/{id}")).await
    }

    /// Move a task to the archive; the backend stamps `archived_at`.
    pub async fn archive(&self, id: Uuid) -> Result<Task, ApiError> {
        self.http.post_empty(&format!("/tasks/{id}/archive")).await
    }

    /// Bring an archived task back to its previous status.
    pub async fn restore(&self, id: Uuid) -> Result<Task, ApiError> {
        self.http.post_empty(&format!("/tasks/{id}/restore")).await
    }
}
