use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn user_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": "a@b.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "tenant_id": "tenant-123"
    })
}

fn token_json(token: &str) -> serde_json::Value {
    json!({ "access_token": token, "token_type": "bearer" })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

fn credentials() -> LoginRequest {
    LoginRequest {
        username: "a@b.com".into(),
        password: "x".into(),
    }
}

#[tokio::test]
async fn login_sends_form_encoded_credentials() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/login")
                .header("accept", "application/json")
                .header("content-type", "application/x-www-form-urlencoded")
                .body_contains("username=a%40b.com")
                .body_contains("password=x");
            then.status(200).json_body(token_json("tok-1"));
        })
        .await;

    let response = api_client(&server).login(&credentials(), None).await.unwrap();
    assert_eq!(response.access_token, "tok-1");
    assert_eq!(response.token_type, "bearer");
    mock.assert_async().await;
}

#[tokio::test]
async fn login_attaches_tenant_header_when_supplied() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/login")
                .header("x-tenant-id", "tenant-123");
            then.status(200).json_body(token_json("tok-1"));
        })
        .await;

    api_client(&server)
        .login(&credentials(), Some("tenant-123"))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn login_surfaces_server_detail_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/login");
            then.status(401).json_body(json!({ "detail": "Incorrect email or password" }));
        })
        .await;

    let error = api_client(&server)
        .login(&credentials(), None)
        .await
        .expect_err("should fail");
    assert_eq!(error.to_string(), "Incorrect email or password");
    assert!(error.is_unauthorized());
}

#[tokio::test]
async fn login_falls_back_when_error_body_is_malformed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/login");
            then.status(502).body("<html>bad gateway</html>");
        })
        .await;

    let error = api_client(&server)
        .login(&credentials(), None)
        .await
        .expect_err("should fail");
    assert_eq!(error.to_string(), "Login failed");
}

#[tokio::test]
async fn sign_up_posts_json_and_returns_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/sign-up")
                .json_body(json!({
                    "email": "founder@acme.test",
                    "password": "secret",
                    "organization_name": "Acme",
                    "organization_size": 3
                }));
            then.status(200).json_body(token_json("tok-2"));
        })
        .await;

    let response = api_client(&server)
        .sign_up(&SignUpRequest {
            email: "founder@acme.test".into(),
            password: "secret".into(),
            organization_name: "Acme".into(),
            organization_size: 3,
            first_name: None,
            last_name: None,
        })
        .await
        .unwrap();
    assert_eq!(response.access_token, "tok-2");
    mock.assert_async().await;
}

#[tokio::test]
async fn sign_up_error_uses_fallback_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/sign-up");
            then.status(409).json_body(json!({ "unexpected": "shape" }));
        })
        .await;

    let error = api_client(&server)
        .sign_up(&SignUpRequest {
            email: "founder@acme.test".into(),
            password: "secret".into(),
            organization_name: "Acme".into(),
            organization_size: 1,
            first_name: Some("Ada".into()),
            last_name: None,
        })
        .await
        .expect_err("should fail");
    assert_eq!(error.to_string(), "Sign up failed");
}

#[tokio::test]
async fn get_current_user_sends_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/auth/me")
                .header("authorization", "Bearer tok-1");
            then.status(200).json_body(user_json("u1"));
        })
        .await;

    let user = api_client(&server).get_current_user("tok-1").await.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.tenant_id, "tenant-123");
    mock.assert_async().await;
}

#[tokio::test]
async fn get_current_user_rejection_carries_status_and_detail() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/auth/me");
            then.status(401).json_body(json!({ "detail": "invalid token" }));
        })
        .await;

    let error = api_client(&server)
        .get_current_user("stale")
        .await
        .expect_err("should fail");
    assert_eq!(error, ApiError::Http { status: 401, message: "invalid token".into() });
}

#[tokio::test]
async fn logout_posts_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/logout")
                .header("authorization", "Bearer tok-1");
            then.status(200);
        })
        .await;

    api_client(&server).logout("tok-1").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn password_reset_endpoints_post_json() {
    let server = MockServer::start_async().await;
    let request_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/request-password-reset")
                .json_body(json!({ "email": "a@b.com" }));
            then.status(200);
        })
        .await;
    let reset_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v1/auth/reset-password")
                .json_body(json!({ "reset_token": "rt-1", "new_password": "pw" }));
            then.status(200);
        })
        .await;

    let client = api_client(&server);
    client.request_password_reset("a@b.com").await.unwrap();
    client
        .reset_password(&PasswordReset {
            reset_token: "rt-1".into(),
            new_password: "pw".into(),
        })
        .await
        .unwrap();
    request_mock.assert_async().await;
    reset_mock.assert_async().await;
}

#[tokio::test]
async fn server_errors_surface_like_client_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v1/auth/reset-password");
            then.status(500).json_body(json!({ "detail": "reset token expired" }));
        })
        .await;

    let error = api_client(&server)
        .reset_password(&PasswordReset {
            reset_token: "rt-1".into(),
            new_password: "pw".into(),
        })
        .await
        .expect_err("should fail");
    // 4xx and 5xx normalize identically; only the message text differs.
    assert_eq!(error.to_string(), "reset token expired");
    assert!(!error.is_unauthorized());
}

#[tokio::test]
async fn transport_failure_is_not_an_http_error() {
    // Nothing listens on this port.
    let client = ApiClient::new_with_base_url("http://127.0.0.1:1");
    let error = client
        .login(&credentials(), None)
        .await
        .expect_err("should fail");
    assert!(matches!(error, ApiError::Request(_)));
}
