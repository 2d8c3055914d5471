use crate::{
    api::{ApiError, LoginRequest, SignUpRequest, UserResponse},
    session::SessionManager,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub is_authenticated: bool,
    pub loading: bool,
}

fn create_auth_context() -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    set_auth_state.update(|state| state.loading = true);

    let session = use_session();
    let set_auth_for_check = set_auth_state;
    spawn_local(async move {
        match session.current_user().await {
            Ok(user) => set_auth_for_check.update(|state| {
                state.user = Some(user);
                state.is_authenticated = true;
                state.loading = false;
            }),
            Err(_) => set_auth_for_check.update(|state| {
                state.user = None;
                state.is_authenticated = false;
                state.loading = false;
            }),
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_session() -> SessionManager {
    use_context::<SessionManager>().unwrap_or_else(SessionManager::new)
}

pub async fn login_request(
    request: LoginRequest,
    tenant_id: Option<String>,
    session: &SessionManager,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match session.login(&request, tenant_id.as_deref()).await {
        Ok(_) => {
            // The login response carries no profile; fetch it best-effort.
            let user = session.current_user().await.ok();
            set_auth_state.update(|state| {
                state.user = user;
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn sign_up_request(
    request: SignUpRequest,
    session: &SessionManager,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match session.sign_up(&request).await {
        Ok(_) => {
            let user = session.current_user().await.ok();
            set_auth_state.update(|state| {
                state.user = user;
                state.is_authenticated = true;
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn logout(session: &SessionManager, set_auth_state: WriteSignal<AuthState>) {
    session.logout().await;

    set_auth_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
        state.loading = false;
    });
}

pub fn use_login_action() -> Action<(LoginRequest, Option<String>), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let session = use_session();

    create_action(move |input: &(LoginRequest, Option<String>)| {
        let (request, tenant_id) = input.clone();
        let session = session.clone();
        async move { login_request(request, tenant_id, &session, set_auth).await }
    })
}

pub fn use_sign_up_action() -> Action<SignUpRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let session = use_session();

    create_action(move |request: &SignUpRequest| {
        let request = request.clone();
        let session = session.clone();
        async move { sign_up_request(request, &session, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let session = use_session();

    create_action(move |_: &()| {
        let session = session.clone();
        async move { logout(&session, set_auth).await }
    })
}
