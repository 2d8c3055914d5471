use reqwest::{header, Client, Response};

use crate::{api::types::*, config};

/// Stateless HTTP transport for the HireWise API. Holds no session state;
/// bearer tokens are passed in by the caller per request.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    /// Pins the base URL instead of resolving it from runtime config.
    /// Used by tests to point the client at a mock server.
    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn bearer_headers(token: &str) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::request_failed("Invalid token format"))?,
        );
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Uniform non-2xx normalization: use the JSON body's `detail` field as
    /// the message, or the operation's fallback when the body is missing,
    /// malformed, or empty.
    pub(crate) async fn error_from_response(response: Response, fallback: &str) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.detail)
            .filter(|detail| !detail.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        ApiError::Http { status, message }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
