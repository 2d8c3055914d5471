use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use crate::utils::storage;
use leptos::*;

#[derive(Clone)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub tenant_id: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<(LoginRequest, Option<String>), Result<(), ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let tenant_id = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    storage::redirect("/dashboard");
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        email,
        password,
        tenant_id,
        error,
        login_action,
    }
}

impl LoginViewModel {
    /// Validates the form and dispatches the login. Validation failures are
    /// surfaced locally and never reach the network.
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        match build_login_request(&email, &password) {
            Ok(request) => {
                self.error.set(None);
                let tenant = normalize_tenant_id(&self.tenant_id.get_untracked());
                self.login_action.dispatch((request, tenant));
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

fn build_login_request(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::validation("Please fill in all required fields"));
    }
    Ok(LoginRequest {
        username: email.to_string(),
        password: password.to_string(),
    })
}

/// An empty or whitespace tenant field means "no tenant header".
fn normalize_tenant_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn build_login_request_rejects_missing_fields() {
        let err = build_login_request("", "pw").expect_err("should fail");
        assert_eq!(err, ApiError::validation("Please fill in all required fields"));
        let err = build_login_request("a@b.com", "").expect_err("should fail");
        assert_eq!(err, ApiError::validation("Please fill in all required fields"));
    }

    #[wasm_bindgen_test]
    fn build_login_request_trims_email() {
        let request = build_login_request("  a@b.com  ", "pw").expect("valid");
        assert_eq!(request.username, "a@b.com");
        assert_eq!(request.password, "pw");
    }

    #[wasm_bindgen_test]
    fn normalize_tenant_id_maps_blank_to_none() {
        assert_eq!(normalize_tenant_id(""), None);
        assert_eq!(normalize_tenant_id("   "), None);
        assert_eq!(normalize_tenant_id(" tenant-123 "), Some("tenant-123".into()));
    }
}
