#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::UserResponse;
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn sample_user() -> UserResponse {
        UserResponse {
            id: "u-1".into(),
            email: "ada@hirewise.test".into(),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            tenant_id: "tenant-123".into(),
        }
    }

    pub fn provide_auth(
        user: Option<UserResponse>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user,
            is_authenticated: true,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn provide_auth_state(
        is_authenticated: bool,
        loading: bool,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            user: None,
            is_authenticated,
            loading,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
