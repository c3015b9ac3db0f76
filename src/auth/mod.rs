//! Authentication gateway
//!
//! High-level auth operations over `HttpClient`. Operations that issue a new
//! session (`login`, `register`, `verify_otp`, `guest_login`) persist the
//! `{token, user}` pair as one unit and move the session context to
//! `Authenticated`. `logout` is best-effort remotely but always clears local
//! state.

pub mod types;

use crate::error::ApiError;
use crate::http::HttpClient;
use crate::session::SessionContext;
use std::sync::Arc;
use types::{
    AuthResponse, LoginRequest, MessageResponse, ProfileUpdate, RegisterRequest, SendOtpRequest,
    User, VerifyOtpRequest,
};

/// Auth API client. The single entry point for session mutations.
pub struct AuthGateway {
    http: Arc<HttpClient>,
    session: Arc<SessionContext>,
}

impl AuthGateway {
    pub fn new(http: Arc<HttpClient>, session: Arc<SessionContext>) -> Self {
        Self { http, session }
    }

    /// Request a one-time password for `email`.
    pub async fn send_otp(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.http
            .post(
                "/auth/send-otp",
                &SendOtpRequest {
                    email: email.to_string(),
                },
            )
            .await
    }

    /// Exchange a one-time password for a session.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<User, ApiError> {
        let response: AuthResponse = self
            .http
            .post(
                "/auth/verify-otp",
                &VerifyOtpRequest {
                    email: email.to_string(),
                    otp: otp.to_string(),
                },
            )
            .await?;
        self.establish(response).await
    }

    /// Create an account and sign in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let response: AuthResponse = self
            .http
            .post(
                "/auth/register",
                &RegisterRequest {
                    name: name.to_string(),
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        self.establish(response).await
    }

    /// Sign in with email and password.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let response: AuthResponse = self
            .http
            .post(
                "/auth/login",
                &LoginRequest {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            )
            .await?;
        self.establish(response).await
    }

    /// Create an anonymous guest session.
    ///
    /// An active session, guest or not, is overwritten by the new one.
    pub async fn guest_login(&self) -> Result<User, ApiError> {
        let response: AuthResponse = self.http.post_empty("/auth/guest").await?;
        self.establish(response).await
    }

    /// Fetch the current user's profile from the server.
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.http.get("/auth/me").await
    }

    /// Apply a partial profile update; the returned record replaces the
    /// session's user, leaving the token untouched.
    pub async fn update_profile(&self, changes: &ProfileUpdate) -> Result<User, ApiError> {
        let user: User = self.http.put("/auth/me", changes).await?;
        self.session.replace_user(user.clone()).await?;
        Ok(user)
    }

    /// Force a token refresh outside the automatic 401 path.
    pub async fn refresh_token(&self) -> Result<(), ApiError> {
        self.http.refresh_access_token().await.map(|_| ())
    }

    /// Sign out.
    ///
    /// The remote call is best-effort: a network failure or remote rejection
    /// is logged and swallowed, and local session state is cleared either
    /// way. Local logout must never be blocked.
    pub async fn logout(&self) {
        if let Err(err) = self
            .http
            .post_empty::<serde_json::Value>("/auth/logout")
            .await
        {
            tracing::warn!(%err, "remote logout failed, clearing local session anyway");
        }
        self.session.clear().await;
    }

    async fn establish(&self, response: AuthResponse) -> Result<User, ApiError> {
        self.session
            .establish(&response.token, response.user.clone())
            .await?;
        tracing::debug!(user = %response.user.email, "session established");
        Ok(response.user)
    }
}
