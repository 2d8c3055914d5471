use leptos::*;

pub mod view_model;

mod panel;

pub use panel::SignUpPanel;

#[component]
pub fn SignUpPage() -> impl IntoView {
    view! { <SignUpPanel /> }
}
