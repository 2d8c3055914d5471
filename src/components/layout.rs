use crate::{
    components::common::{Button, ButtonVariant},
    state::auth::{self, use_auth},
};
use leptos::*;

/// Static navigation tree for the dashboard sidebar. Items without an href
/// are section placeholders for features that have not shipped yet.
pub struct NavItem {
    pub label: &'static str,
    pub href: Option<&'static str>,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        href: Some("/dashboard"),
    },
    NavItem {
        label: "Job Openings",
        href: None,
    },
    NavItem {
        label: "Candidates",
        href: None,
    },
    NavItem {
        label: "Interviews",
        href: None,
    },
    NavItem {
        label: "Settings",
        href: None,
    },
];

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };
    view! {
        <header class="bg-white shadow-sm border-b border-gray-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-semibold text-gray-900">
                            "HireWise AI"
                        </h1>
                    </div>
                    <div class="flex items-center gap-4">
                        <span class="hidden sm:block text-sm text-gray-600">
                            {move || {
                                auth.get()
                                    .user
                                    .map(|user| user.display_name())
                                    .unwrap_or_default()
                            }}
                        </span>
                        <Button
                            variant=ButtonVariant::Ghost
                            loading=Signal::derive(move || logout_pending.get())
                            on:click=on_logout
                        >
                            "Log out"
                        </Button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-64 bg-white border-r border-gray-200 hidden md:flex md:flex-col">
            <div class="px-4 py-6">
                <nav class="space-y-1">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| match item.href {
                            Some(href) => view! {
                                <a
                                    href=href
                                    class="block px-3 py-2 rounded-md text-sm font-medium text-gray-700 hover:bg-yellow-100 hover:text-yellow-900"
                                >
                                    {item.label}
                                </a>
                            }
                            .into_view(),
                            None => view! {
                                <span class="block px-3 py-2 rounded-md text-sm text-gray-400 cursor-default">
                                    {item.label}
                                </span>
                            }
                            .into_view(),
                        })
                        .collect_view()}
                </nav>
            </div>
        </aside>
    }
}

/// Dashboard shell: sidebar on the left, header plus scrolling content on
/// the right.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="flex h-screen bg-gradient-to-br from-yellow-50 to-white">
            <Sidebar/>
            <div class="flex-1 flex flex-col overflow-hidden">
                <Header/>
                <main class="flex-1 overflow-y-auto p-6">{children()}</main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-violet-600"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_auth, sample_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_shows_user_display_name() {
        let html = render_to_string(move || {
            provide_auth(Some(sample_user()));
            view! { <Header /> }
        });
        assert!(html.contains("HireWise AI"));
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Log out"));
    }

    #[test]
    fn app_shell_renders_children_and_navigation() {
        let html = render_to_string(move || {
            provide_auth(Some(sample_user()));
            view! { <AppShell><div>"shell-child"</div></AppShell> }
        });
        assert!(html.contains("shell-child"));
        assert!(html.contains("Dashboard"));
        assert!(html.contains("Candidates"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <SuccessMessage message="ok".into() />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("ok"));
    }
}
