use reqwest::header;
use serde_json::json;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, PasswordReset, SignUpRequest, UserResponse},
};

impl ApiClient {
    /// Password-grant login. The credentials travel as form fields
    /// (`username` holds the email); a tenant id, when supplied, rides
    /// along in the `X-Tenant-Id` header.
    pub async fn login(
        &self,
        credentials: &LoginRequest,
        tenant_id: Option<&str>,
    ) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let mut request = self
            .http_client()
            .post(format!("{}/api/v1/auth/login", base_url))
            .header(header::ACCEPT, "application/json")
            .form(&[
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ]);
        if let Some(tenant) = tenant_id {
            request = request.header("X-Tenant-Id", tenant);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response, "Login failed").await)
        }
    }

    pub async fn sign_up(&self, data: &SignUpRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/api/v1/auth/sign-up", base_url))
            .header(header::ACCEPT, "application/json")
            .json(data)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response, "Sign up failed").await)
        }
    }

    pub async fn get_current_user(&self, token: &str) -> Result<UserResponse, ApiError> {
        let headers = Self::bearer_headers(token)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/api/v1/auth/me", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from_response(response, "Failed to get user info").await)
        }
    }

    /// Server-side token invalidation. The response body is empty; callers
    /// only care whether the status was 2xx.
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let headers = Self::bearer_headers(token)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/api/v1/auth/logout", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response, "Logout failed").await)
        }
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/api/v1/auth/request-password-reset", base_url))
            .header(header::ACCEPT, "application/json")
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response, "Request failed").await)
        }
    }

    pub async fn reset_password(&self, data: &PasswordReset) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/api/v1/auth/reset-password", base_url))
            .header(header::ACCEPT, "application/json")
            .json(data)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response, "Password reset failed").await)
        }
    }
}
