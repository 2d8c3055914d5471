use crate::api::{ApiError, PasswordReset};
use crate::state::auth;
use leptos::*;

const REQUEST_SENT_MESSAGE: &str =
    "If an account exists for that email, a reset link is on its way.";
const RESET_DONE_MESSAGE: &str = "Password updated. You can now sign in.";

/// Backs both forms on the reset page: requesting a reset email, and
/// submitting the emailed token together with a new password.
#[derive(Clone)]
pub struct ResetPasswordViewModel {
    pub email: RwSignal<String>,
    pub reset_token: RwSignal<String>,
    pub new_password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub success: RwSignal<Option<String>>,
    pub request_action: Action<String, Result<(), ApiError>>,
    pub reset_action: Action<PasswordReset, Result<(), ApiError>>,
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let email = create_rw_signal(String::new());
    let reset_token = create_rw_signal(token_from_query().unwrap_or_default());
    let new_password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let success = create_rw_signal(None::<String>);

    let session_for_request = auth::use_session();
    let request_action = create_action(move |email: &String| {
        let session = session_for_request.clone();
        let email = email.clone();
        async move { session.request_password_reset(&email).await }
    });

    let session_for_reset = auth::use_session();
    let reset_action = create_action(move |data: &PasswordReset| {
        let session = session_for_reset.clone();
        let data = data.clone();
        async move { session.reset_password(&data).await }
    });

    create_effect(move |_| {
        if let Some(result) = request_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    success.set(Some(REQUEST_SENT_MESSAGE.to_string()));
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    success.set(Some(RESET_DONE_MESSAGE.to_string()));
                }
                Err(err) => {
                    success.set(None);
                    error.set(Some(err));
                }
            }
        }
    });

    ResetPasswordViewModel {
        email,
        reset_token,
        new_password,
        error,
        success,
        request_action,
        reset_action,
    }
}

impl ResetPasswordViewModel {
    pub fn submit_request(&self) {
        if self.request_action.pending().get_untracked() {
            return;
        }
        match validate_email(&self.email.get_untracked()) {
            Ok(email) => {
                self.error.set(None);
                self.request_action.dispatch(email);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }

    pub fn submit_reset(&self) {
        if self.reset_action.pending().get_untracked() {
            return;
        }
        match build_reset_request(
            &self.reset_token.get_untracked(),
            &self.new_password.get_untracked(),
        ) {
            Ok(data) => {
                self.error.set(None);
                self.reset_action.dispatch(data);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

/// Reads the `token` query parameter when the page is reached from a reset
/// email link. Outside a router this yields nothing.
fn token_from_query() -> Option<String> {
    use_context::<leptos_router::RouterContext>()?;
    let query = leptos_router::use_query_map();
    query.with_untracked(|params| params.get("token").cloned())
}

fn validate_email(raw: &str) -> Result<String, ApiError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Please fill in all required fields"));
    }
    Ok(email.to_string())
}

fn build_reset_request(token: &str, new_password: &str) -> Result<PasswordReset, ApiError> {
    let token = token.trim();
    if token.is_empty() || new_password.is_empty() {
        return Err(ApiError::validation("Please fill in all required fields"));
    }
    Ok(PasswordReset {
        reset_token: token.to_string(),
        new_password: new_password.to_string(),
    })
}
