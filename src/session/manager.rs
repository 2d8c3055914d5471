use std::rc::Rc;

use crate::{
    api::{ApiClient, ApiError, LoginRequest, LoginResponse, PasswordReset, SignUpRequest, UserResponse},
    utils::storage,
};

use super::store::{BrowserStore, SessionStore};

/// Client-side source of truth for "is there an authenticated session".
/// Delegates the network work to [`ApiClient`] and owns the two storage
/// slots through the [`SessionStore`] port.
#[derive(Clone)]
pub struct SessionManager {
    client: Rc<ApiClient>,
    store: Rc<dyn SessionStore>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::new_with_parts(Rc::new(ApiClient::new()), Rc::new(BrowserStore))
    }

    pub fn new_with_parts(client: Rc<ApiClient>, store: Rc<dyn SessionStore>) -> Self {
        Self { client, store }
    }

    /// Logs in and persists the session. The token is written only after
    /// the network call resolves; a failure leaves storage untouched. The
    /// tenant id is stored only when one was supplied, so a previously
    /// stored tenant id survives a tenant-less login.
    pub async fn login(
        &self,
        credentials: &LoginRequest,
        tenant_id: Option<&str>,
    ) -> Result<LoginResponse, ApiError> {
        let response = self.client.login(credentials, tenant_id).await?;
        self.store.set_token(&response.access_token);
        if let Some(tenant) = tenant_id {
            self.store.set_tenant_id(tenant);
        }
        Ok(response)
    }

    pub async fn sign_up(&self, data: &SignUpRequest) -> Result<LoginResponse, ApiError> {
        let response = self.client.sign_up(data).await?;
        self.store.set_token(&response.access_token);
        Ok(response)
    }

    /// Ends the session. The remote invalidation is best-effort: a failure
    /// is logged and swallowed, local state is cleared unconditionally, and
    /// the browser is sent back to the login page. Never fails.
    pub async fn logout(&self) {
        if let Some(token) = self.store.token() {
            if let Err(error) = self.client.logout(&token).await {
                log::warn!("remote logout failed: {}", error);
            }
        }
        self.store.clear_token();
        self.store.clear_tenant_id();
        storage::redirect("/login");
    }

    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        self.client.request_password_reset(email).await
    }

    pub async fn reset_password(&self, data: &PasswordReset) -> Result<(), ApiError> {
        self.client.reset_password(data).await
    }

    /// Presence check only; the token may already be expired or revoked
    /// server-side.
    pub fn is_authenticated(&self) -> bool {
        self.store.token().is_some()
    }

    pub fn tenant_id(&self) -> Option<String> {
        self.store.tenant_id()
    }

    /// Fetches the profile snapshot for the stored token. Fails without a
    /// network call when no token is present. A 401/403 clears the stored
    /// token before re-throwing; transport failures leave it in place so a
    /// transient outage does not force re-authentication.
    pub async fn current_user(&self) -> Result<UserResponse, ApiError> {
        let token = self.store.token().ok_or(ApiError::MissingToken)?;
        match self.client.get_current_user(&token).await {
            Ok(user) => Ok(user),
            Err(error) => {
                if error.is_unauthorized() {
                    self.store.clear_token();
                }
                Err(error)
            }
        }
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
