use leptos::*;

pub mod view_model;

mod panel;

pub use panel::ResetPasswordPanel;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    view! { <ResetPasswordPanel /> }
}
