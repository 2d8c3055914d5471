use crate::api::{ApiError, SignUpRequest};
use crate::state::auth;
use crate::utils::storage;
use leptos::*;

/// Organization size brackets offered at sign-up. The numeric codes are
/// what the backend stores.
pub const ORGANIZATION_SIZE_OPTIONS: &[(i32, &str)] = &[
    (1, "0-1 Employees"),
    (2, "2-9 Employees"),
    (3, "10-49 Employees"),
    (4, "50-249 Employees"),
    (5, "250+ Employees"),
];

#[derive(Clone)]
pub struct SignUpViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub organization_name: RwSignal<String>,
    pub organization_size: RwSignal<i32>,
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub sign_up_action: Action<SignUpRequest, Result<(), ApiError>>,
}

pub fn use_sign_up_view_model() -> SignUpViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let organization_name = create_rw_signal(String::new());
    let organization_size = create_rw_signal(ORGANIZATION_SIZE_OPTIONS[0].0);
    let first_name = create_rw_signal(String::new());
    let last_name = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let sign_up_action = auth::use_sign_up_action();

    create_effect(move |_| {
        if let Some(result) = sign_up_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    storage::redirect("/dashboard");
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    SignUpViewModel {
        email,
        password,
        organization_name,
        organization_size,
        first_name,
        last_name,
        error,
        sign_up_action,
    }
}

impl SignUpViewModel {
    pub fn submit(&self) {
        if self.sign_up_action.pending().get_untracked() {
            return;
        }
        match build_sign_up_request(
            &self.email.get_untracked(),
            &self.password.get_untracked(),
            &self.organization_name.get_untracked(),
            self.organization_size.get_untracked(),
            &self.first_name.get_untracked(),
            &self.last_name.get_untracked(),
        ) {
            Ok(request) => {
                self.error.set(None);
                self.sign_up_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

fn build_sign_up_request(
    email: &str,
    password: &str,
    organization_name: &str,
    organization_size: i32,
    first_name: &str,
    last_name: &str,
) -> Result<SignUpRequest, ApiError> {
    let email = email.trim();
    let organization_name = organization_name.trim();
    if email.is_empty() || password.is_empty() || organization_name.is_empty() {
        return Err(ApiError::validation("Please fill in all required fields"));
    }
    Ok(SignUpRequest {
        email: email.to_string(),
        password: password.to_string(),
        organization_name: organization_name.to_string(),
        organization_size,
        first_name: optional_field(first_name),
        last_name: optional_field(last_name),
    })
}

fn optional_field(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
