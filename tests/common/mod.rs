//! Shared fixtures for the integration suite
//!
//! Builds clients against a `wiremock` backend so every test exercises the
//! real HTTP + session path end to end.

#![allow(dead_code)]

use daymark::session::{MemoryStore, SessionStore, ACCESS_TOKEN_KEY, USER_KEY};
use daymark::{Config, DaymarkClient};
use std::sync::Arc;
use wiremock::MockServer;

/// User fields as the backend returns them (top level, Mongo-style id).
pub fn user_body(id: &str, name: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "_id": id,
        "name": name,
        "email": email,
        "isGuest": false,
    })
}

/// Auth response: token alongside the user fields.
pub fn auth_body(token: &str, id: &str, name: &str, email: &str) -> serde_json::Value {
    let mut body = user_body(id, name, email);
    body["token"] = serde_json::json!(token);
    body
}

pub fn config_for(server: &MockServer) -> Config {
    Config::builder()
        .server_url(server.uri())
        .build()
        .expect("mock server uri is a valid base url")
}

/// Fresh client over a memory store, already initialized (unauthenticated).
pub async fn fresh_client(server: &MockServer) -> DaymarkClient {
    let client = DaymarkClient::new(config_for(server), Arc::new(MemoryStore::new()));
    client.initialize().await;
    client
}

/// Client whose store is pre-seeded with a session, already initialized.
/// Returns the store so tests can inspect it after the fact.
pub async fn authenticated_client(
    server: &MockServer,
    token: &str,
) -> (DaymarkClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    seed_session(store.as_ref(), token);
    let client = DaymarkClient::new(config_for(server), store.clone());
    client.initialize().await;
    (client, store)
}

/// Write a `{token, user}` pair straight into a store.
pub fn seed_session(store: &dyn SessionStore, token: &str) {
    store.set(ACCESS_TOKEN_KEY, token).unwrap();
    store
        .set(
            USER_KEY,
            &user_body("u1", "Test User", "test@example.com").to_string(),
        )
        .unwrap();
}
