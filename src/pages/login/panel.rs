use super::view_model::{use_login_view_model, LoginViewModel};
use crate::components::{
    common::{Button, ButtonVariant, FormField},
    error::InlineErrorMessage,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let email = vm.email;
    let password = vm.password;
    let tenant_id = vm.tenant_id;
    let error = vm.error;

    let vm_for_submit = vm.clone();
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm_for_submit.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-yellow-50 to-white py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h1 class="text-center text-2xl font-bold text-violet-600">"HireWise AI"</h1>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        "Sign in to your account"
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        "Or "
                        <a href="/sign-up" class="font-medium text-violet-600 hover:text-violet-500">
                            "start your free trial"
                        </a>
                    </p>
                </div>

                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="space-y-4">
                        <FormField
                            id="email"
                            label="Email address"
                            input_type="email"
                            value=email
                        />
                        <FormField
                            id="password"
                            label="Password"
                            input_type="password"
                            value=password
                        />
                        <FormField
                            id="tenant"
                            label="Organization ID (optional)"
                            input_type="text"
                            value=tenant_id
                        />
                    </div>

                    <InlineErrorMessage error=Signal::derive(move || error.get()) />

                    <div class="flex items-center justify-between text-sm">
                        <a
                            href="/reset-password"
                            class="font-medium text-violet-600 hover:text-violet-500"
                        >
                            "Forgot your password?"
                        </a>
                    </div>

                    <Button
                        variant=ButtonVariant::Primary
                        class="w-full"
                        loading=Signal::derive(move || pending.get())
                        attr:type="submit"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
