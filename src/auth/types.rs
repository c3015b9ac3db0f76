//! Auth wire types
//!
//! Request and response payloads for the authentication endpoints, plus the
//! `User` record the session layer owns.

use serde::{Deserialize, Serialize};

/// Authenticated user record.
///
/// The id is an opaque string issued by the backend; Mongo-style `_id`
/// payloads are accepted via alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "isGuest", default)]
    pub is_guest: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Authentication response from the server.
///
/// The backend returns the user fields at the top level alongside the token,
/// so the user record is flattened rather than nested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Partial profile update; absent fields are left unchanged by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Plain acknowledgement body (`POST /auth/send-otp`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of a successful `POST /auth/refresh-token`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "64f1c0ffee".to_string(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            is_guest: false,
            phone: None,
            bio: None,
        }
    }

    #[test]
    fn test_user_serialization_roundtrip() {
        let user = sample_user();
        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, deserialized);
    }

    #[test]
    fn test_user_accepts_mongo_style_id() {
        let json = r#"{"_id":"abc123","name":"Guest","email":"g@example.com","isGuest":true}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "abc123");
        assert!(user.is_guest);
    }

    #[test]
    fn test_user_is_guest_defaults_false() {
        let json = r#"{"id":"1","name":"N","email":"n@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(!user.is_guest);
    }

    #[test]
    fn test_auth_response_flattens_user_fields() {
        let json = r#"{"token":"T1","id":"1","name":"N","email":"n@example.com"}"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token, "T1");
        assert_eq!(resp.user.email, "n@example.com");
    }

    #[test]
    fn test_profile_update_skips_absent_fields() {
        let update = ProfileUpdate {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"name":"New Name"}"#);
    }
}
