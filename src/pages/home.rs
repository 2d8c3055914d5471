use crate::state::auth::use_session;
use crate::utils::storage;
use leptos::*;

/// Public landing page. Visitors with a stored session are sent straight
/// to the dashboard.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    create_effect(move |_| {
        if session.is_authenticated() {
            storage::redirect("/dashboard");
        }
    });

    view! {
        <div class="min-h-screen bg-gradient-to-br from-yellow-50 to-white">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-gray-900 sm:text-5xl lg:text-6xl">
                        "HireWise AI"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-gray-600 sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "AI-assisted hiring for growing teams. Coming soon."
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center gap-3 lg:mt-8">
                        <a
                            href="/login"
                            class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-white bg-violet-600 hover:bg-violet-700 lg:py-4 lg:text-lg lg:px-10"
                        >
                            "Sign in"
                        </a>
                        <a
                            href="/sign-up"
                            class="mt-3 sm:mt-0 w-full flex items-center justify-center px-8 py-3 border border-violet-200 text-base font-medium rounded-md text-violet-700 bg-white hover:bg-violet-50 lg:py-4 lg:text-lg lg:px-10"
                        >
                            "Start free trial"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
