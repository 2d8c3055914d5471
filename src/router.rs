use leptos::*;
use leptos_router::*;

use crate::{
    pages::{
        dashboard::DashboardPage, home::HomePage, login::LoginPage,
        reset_password::ResetPasswordPage, sign_up::SignUpPage,
    },
    session::SessionManager,
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/sign-up", "/reset-password", "/dashboard"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login", "/sign-up", "/reset-password"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(SessionManager::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/sign-up" view=SignUpPage/>
                    <Route path="/reset-password" view=ResetPasswordPage/>
                    <Route path="/dashboard" view=DashboardPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
