//! HTTP client with bearer attachment and token refresh
//!
//! Every request reads the access token from the session at send time and
//! attaches it as an `Authorization: Bearer` header. On a 401 the client
//! performs exactly one refresh-then-retry cycle:
//!
//! 1. Mark the request retried (`RetryableRequest` makes the at-most-once
//!    cap structural, not a mutable flag on the request itself).
//! 2. `POST /auth/refresh-token`. On success, persist the new token and
//!    resend the original request once; its response is returned verbatim,
//!    even if it fails again.
//! 3. If the refresh itself fails for any reason, the session is cleared and
//!    the call fails with `ApiError::RefreshFailed`.
//!
//! Any other status or transport failure propagates unchanged. This is a
//! single-retry circuit, not backoff: refresh either succeeds once or the
//! session is unrecoverable.

use crate::auth::types::RefreshResponse;
use crate::config::Config;
use crate::error::ApiError;
use crate::session::SessionContext;
use reqwest::{header, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Path of the refresh endpoint; requests to it are never refresh-retried.
const REFRESH_PATH: &str = "/auth/refresh-token";

/// One outbound API request, captured so it can be resent after a refresh.
#[derive(Debug, Clone)]
struct ApiRequest {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    fn new(method: Method, path: &str, body: Option<serde_json::Value>) -> Self {
        Self {
            method,
            path: path.to_string(),
            body,
        }
    }
}

/// A request plus its retry state.
///
/// The 401 handler only fires while `retried` is false and sets it before
/// refreshing, so a request can never trigger a second refresh cycle.
#[derive(Debug)]
struct RetryableRequest {
    original: ApiRequest,
    retried: bool,
}

impl RetryableRequest {
    fn new(original: ApiRequest) -> Self {
        Self {
            original,
            retried: false,
        }
    }
}

/// Backend HTTP client shared by the auth and resource gateways.
pub struct HttpClient {
    http: reqwest::Client,
    config: Config,
    session: Arc<SessionContext>,
}

impl HttpClient {
    pub fn new(config: Config, session: Arc<SessionContext>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    /// `GET path`, decoding the response body as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(ApiRequest::new(Method::GET, path, None)).await?;
        decode_json(response).await
    }

    /// `POST path` with a JSON body, decoding the response body as `T`.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode_json(body)?;
        let response = self
            .execute(ApiRequest::new(Method::POST, path, Some(body)))
            .await?;
        decode_json(response).await
    }

    /// `POST path` without a body, decoding the response body as `T`.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .execute(ApiRequest::new(Method::POST, path, None))
            .await?;
        decode_json(response).await
    }

    /// `PUT path` with a JSON body, decoding the response body as `T`.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode_json(body)?;
        let response = self
            .execute(ApiRequest::new(Method::PUT, path, Some(body)))
            .await?;
        decode_json(response).await
    }

    /// `DELETE path`, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(ApiRequest::new(Method::DELETE, path, None))
            .await?;
        Ok(())
    }

    /// Send a request, refreshing the token at most once on 401.
    async fn execute(&self, request: ApiRequest) -> Result<Response, ApiError> {
        let mut request = RetryableRequest::new(request);
        loop {
            let response = self.dispatch(&request.original).await?;

            // A 401 on a request that carried no token is a plain rejection
            // (wrong credentials, bad OTP) - there is no session to refresh.
            if response.status() == StatusCode::UNAUTHORIZED
                && !request.retried
                && request.original.path != REFRESH_PATH
                && self.session.access_token().is_some()
            {
                request.retried = true;
                tracing::debug!(path = %request.original.path, "401 received, refreshing token");
                // The refresh settles before the retry is sent; on failure
                // the session is already cleared and RefreshFailed surfaces.
                self.refresh_access_token().await?;
                continue;
            }

            if response.status().is_success() {
                return Ok(response);
            }
            return Err(http_error(response).await);
        }
    }

    /// Build and send one HTTP request, attaching the bearer token if present.
    async fn dispatch(&self, request: &ApiRequest) -> Result<Response, ApiError> {
        let url = self.config.api_url(&request.path);
        let mut builder = self.http.request(request.method.clone(), &url);

        if let Some(token) = self.session.access_token() {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder
            .send()
            .await
            .map_err(|err| ApiError::network(err.to_string()))
    }

    /// Exchange the session for a new access token.
    ///
    /// On success the new token is persisted (user record untouched) and
    /// returned. On any failure the session is cleared and the result is
    /// `RefreshFailed` - callers treat that as a forced logout.
    pub(crate) async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let request = ApiRequest::new(Method::POST, REFRESH_PATH, None);
        let outcome = async {
            let response = self.dispatch(&request).await?;
            if !response.status().is_success() {
                return Err(http_error(response).await);
            }
            let body: RefreshResponse = decode_json(response).await?;
            self.session.replace_token(&body.token)?;
            Ok(body.token)
        }
        .await;

        match outcome {
            Ok(token) => {
                tracing::debug!("access token refreshed");
                Ok(token)
            }
            Err(err) => {
                tracing::warn!(%err, "token refresh failed, clearing session");
                self.session.clear().await;
                Err(ApiError::RefreshFailed)
            }
        }
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::serialization(err.to_string()))
}

fn encode_json<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|err| ApiError::serialization(err.to_string()))
}

async fn http_error(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    ApiError::http(status, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_request_starts_unretried() {
        let request = RetryableRequest::new(ApiRequest::new(Method::GET, "/tasks", None));
        assert!(!request.retried);
        assert_eq!(request.original.path, "/tasks");
    }

    #[test]
    fn test_api_request_carries_body() {
        let body = serde_json::json!({"email": "a@b.com"});
        let request = ApiRequest::new(Method::POST, "/auth/login", Some(body.clone()));
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body, Some(body));
    }

    #[test]
    fn test_refresh_path_constant_matches_contract() {
        assert_eq!(REFRESH_PATH, "/auth/refresh-token");
    }
}
