use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.message()).unwrap_or_default()}</div>
                {move || match error.get() {
                    Some(ApiError::Http { status, .. }) => {
                        view! { <div class="text-xs opacity-75">{format!("HTTP {}", status)}</div> }.into_view()
                    }
                    _ => ().into_view(),
                }}
            </div>
        </Show>
    }
}
