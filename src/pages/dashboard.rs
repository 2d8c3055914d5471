use crate::{
    components::{guard::RequireAuth, layout::AppShell},
    state::auth::use_auth,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireAuth>
            <AppShell>
                <DashboardContent />
            </AppShell>
        </RequireAuth>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let (auth, _) = use_auth();
    let greeting = move || {
        auth.get()
            .user
            .map(|user| format!("Welcome back, {}", user.display_name()))
            .unwrap_or_else(|| "Welcome back".to_string())
    };
    let tenant = move || auth.get().user.map(|user| user.tenant_id);

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-gray-900">{greeting}</h1>
                <p class="mt-1 text-sm text-gray-600">
                    "Your hiring pipeline at a glance."
                </p>
                {move || {
                    tenant()
                        .map(|id| view! {
                            <p class="mt-1 text-xs text-gray-400">{format!("Organization {}", id)}</p>
                        })
                }}
            </div>

            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                <PlaceholderCard title="Open roles" body="Job openings will appear here." />
                <PlaceholderCard title="Candidates" body="Sourced candidates will appear here." />
                <PlaceholderCard
                    title="Interviews"
                    body="Scheduled interviews will appear here."
                />
            </div>
        </div>
    }
}

#[component]
fn PlaceholderCard(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="bg-white shadow rounded-lg p-6">
            <h3 class="text-lg font-medium text-gray-900">{title}</h3>
            <p class="mt-2 text-sm text-gray-500">{body}</p>
        </div>
    }
}
