use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};

/// Password-grant login payload. The `username` field carries the user's
/// email address; the backend's OAuth2 form convention names it `username`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub organization_name: String,
    pub organization_size: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordReset {
    pub reset_token: String,
    pub new_password: String,
}

/// Read-only profile snapshot returned by `/auth/me`. Never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub tenant_id: String,
}

impl UserResponse {
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }
}

/// Error body shape shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx HTTP response, carrying the server's `detail` message or the
    /// operation's fallback text.
    #[error("{message}")]
    Http { status: u16, message: String },
    /// Transport-level failure (the request never produced a response).
    #[error("Request failed: {0}")]
    Request(String),
    /// Local precondition rejected before any network call.
    #[error("{0}")]
    Validation(String),
    #[error("No authentication token found")]
    MissingToken,
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// True when the server rejected the credential itself.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. })
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn serialize_sign_up_request_skips_absent_names() {
        let request = SignUpRequest {
            email: "founder@acme.test".into(),
            password: "secret".into(),
            organization_name: "Acme".into(),
            organization_size: 2,
            first_name: None,
            last_name: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["organization_size"], serde_json::json!(2));
        assert!(value.get("first_name").is_none());
        assert!(value.get("last_name").is_none());
    }

    #[wasm_bindgen_test]
    fn deserialize_user_response_with_missing_names() {
        let raw = r#"{"id":"u1","email":"a@b.com","tenant_id":"tenant-123"}"#;
        let user: UserResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.tenant_id, "tenant-123");
        assert!(user.first_name.is_none());
    }

    #[wasm_bindgen_test]
    fn deserialize_login_response() {
        let raw = r#"{"access_token":"tok-1","token_type":"bearer"}"#;
        let response: LoginResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.access_token, "tok-1");
        assert_eq!(response.token_type, "bearer");
    }
}
