use super::view_model::use_reset_password_view_model;
use crate::components::{
    common::{Button, ButtonVariant, FormField},
    error::InlineErrorMessage,
    layout::SuccessMessage,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    let error = vm.error;
    let success = vm.success;
    let request_pending = vm.request_action.pending();
    let reset_pending = vm.reset_action.pending();

    let vm_for_request = vm.clone();
    let handle_request = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm_for_request.submit_request();
    };
    let vm_for_reset = vm.clone();
    let handle_reset = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm_for_reset.submit_reset();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-yellow-50 to-white py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h1 class="text-center text-2xl font-bold text-violet-600">"HireWise AI"</h1>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-gray-900">
                        "Reset your password"
                    </h2>
                </div>

                {move || {
                    success
                        .get()
                        .map(|message| view! { <SuccessMessage message=message /> })
                }}

                <InlineErrorMessage error=Signal::derive(move || error.get()) />

                <form class="space-y-4" on:submit=handle_request>
                    <FormField
                        id="email"
                        label="Email address"
                        input_type="email"
                        value=vm.email
                    />
                    <Button
                        variant=ButtonVariant::Primary
                        class="w-full"
                        loading=Signal::derive(move || request_pending.get())
                        attr:type="submit"
                    >
                        {move || {
                            if request_pending.get() { "Sending..." } else { "Email me a reset link" }
                        }}
                    </Button>
                </form>

                <div class="relative">
                    <div class="absolute inset-0 flex items-center">
                        <div class="w-full border-t border-gray-300"></div>
                    </div>
                    <div class="relative flex justify-center text-sm">
                        <span class="px-2 bg-yellow-50 text-gray-500">"Already have a token?"</span>
                    </div>
                </div>

                <form class="space-y-4" on:submit=handle_reset>
                    <FormField id="reset-token" label="Reset token" value=vm.reset_token />
                    <FormField
                        id="new-password"
                        label="New password"
                        input_type="password"
                        value=vm.new_password
                    />
                    <Button
                        variant=ButtonVariant::Primary
                        class="w-full"
                        loading=Signal::derive(move || reset_pending.get())
                        attr:type="submit"
                    >
                        {move || {
                            if reset_pending.get() { "Resetting..." } else { "Set new password" }
                        }}
                    </Button>
                </form>

                <p class="text-center text-sm text-gray-600">
                    <a href="/login" class="font-medium text-violet-600 hover:text-violet-500">
                        "Back to sign in"
                    </a>
                </p>
            </div>
        </div>
    }
}
