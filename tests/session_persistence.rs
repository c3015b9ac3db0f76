//! Session persistence tests
//!
//! The persisted `{token, user}` pair across process restarts, and the
//! corruption-cleanup path that must end in `Unauthenticated` rather than an
//! error.

mod common;

use daymark::session::{
    FileStore, MemoryStore, SessionState, SessionStore, ACCESS_TOKEN_KEY, USER_KEY,
};
use daymark::DaymarkClient;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_session_survives_restart_with_file_store() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::auth_body("T1", "u1", "Me", "me@example.com")),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.json");

    // First run: log in, session lands on disk.
    {
        let store = Arc::new(FileStore::open_at(&session_path).unwrap());
        let client = DaymarkClient::new(common::config_for(&server), store);
        client.initialize().await;
        client.auth.login("me@example.com", "secret").await.unwrap();
    }

    // Second run: the persisted pair restores the session without a network
    // round trip.
    let store = Arc::new(FileStore::open_at(&session_path).unwrap());
    let client = DaymarkClient::new(common::config_for(&server), store);
    client.initialize().await;

    let user = client.session().current_user().await.unwrap();
    assert_eq!(user.email, "me@example.com");
}

#[tokio::test]
async fn test_corrupt_user_record_yields_unauthenticated() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());
    store.set(ACCESS_TOKEN_KEY, "T1").unwrap();
    store.set(USER_KEY, "{ definitely not json").unwrap();

    let client = DaymarkClient::new(common::config_for(&server), store.clone());
    client.initialize().await;

    assert_eq!(client.session().state().await, SessionState::Unauthenticated);
    // Cleanup wiped both entries, not just the broken one.
    assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
    assert_eq!(store.get(USER_KEY).unwrap(), None);
}

#[tokio::test]
async fn test_partial_pair_is_cleared_on_startup() {
    let server = MockServer::start().await;
    let store = Arc::new(MemoryStore::new());
    store.set(ACCESS_TOKEN_KEY, "T1").unwrap(); // token without user

    let client = DaymarkClient::new(common::config_for(&server), store.clone());
    client.initialize().await;

    assert_eq!(client.session().state().await, SessionState::Unauthenticated);
    assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap(), None);
}

#[tokio::test]
async fn test_login_writes_token_and_user_together() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::auth_body("T1", "u1", "Me", "me@example.com")),
        )
        .mount(&server)
        .await;

    let store = Arc::new(MemoryStore::new());
    let client = DaymarkClient::new(common::config_for(&server), store.clone());
    client.initialize().await;
    client.auth.login("me@example.com", "secret").await.unwrap();

    let token = store.get(ACCESS_TOKEN_KEY).unwrap();
    let raw_user = store.get(USER_KEY).unwrap();
    assert_eq!(token, Some("T1".to_string()));
    let user: serde_json::Value = serde_json::from_str(&raw_user.unwrap()).unwrap();
    assert_eq!(user["email"], json!("me@example.com"));
}
