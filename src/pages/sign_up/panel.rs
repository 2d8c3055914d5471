use super::view_model::{use_sign_up_view_model, ORGANIZATION_SIZE_OPTIONS};
use crate::components::{
    common::{Button, ButtonVariant, FormField},
    error::InlineErrorMessage,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn SignUpPanel() -> impl IntoView {
    let vm = use_sign_up_view_model();
    let pending = vm.sign_up_action.pending();
    let error = vm.error;
    let organization_size = vm.organization_size;

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
                        "Create your account"
                    </h2>
                    <p class="mt-2 text-center text-sm text-gray-600">
                        "Already have an account? "
                        <a href="/login" class="font-medium text-violet-600 hover:text-violet-500">
                            "Sign in"
                        </a>
                    </p>
                </div>

                <form class="mt-8 space-y-6" on:submit=handle_submit>
                    <div class="space-y-4">
                        <div class="grid grid-cols-2 gap-4">
                            <FormField id="first-name" label="First name" value=vm.first_name />
                            <FormField id="last-name" label="Last name" value=vm.last_name />
                        </div>
                        <FormField
                            id="email"
                            label="Work email"
                            input_type="email"
                            value=vm.email
                        />
                        <FormField
                            id="password"
                            label="Password"
                            input_type="password"
                            value=vm.password
                        />
                        <FormField
                            id="organization-name"
                            label="Organization name"
                            value=vm.organization_name
                        />
                        <div>
                            <label
                                for="organization-size"
                                class="block text-sm font-medium text-gray-700"
                            >
                                "Organization size"
                            </label>
                            <select
                                id="organization-size"
                                name="organization-size"
                                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm focus:outline-none focus:ring-violet-500 focus:border-violet-500 sm:text-sm"
                                on:change=move |ev| {
                                    if let Ok(code) = event_target_value(&ev).parse::<i32>() {
                                        organization_size.set(code);
                                    }
                                }
                            >
                                {ORGANIZATION_SIZE_OPTIONS
                                    .iter()
                                    .map(|(code, label)| {
                                        view! {
                                            <option
                                                value=code.to_string()
                                                selected=move || organization_size.get() == *code
                                            >
                                                {*label}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <InlineErrorMessage error=Signal::derive(move || error.get()) />

                    <Button
                        variant=ButtonVariant::Primary
                        class="w-full"
                        loading=Signal::derive(move || pending.get())
                        attr:type="submit"
                    >
                        {move || {
                            if pending.get() { "Creating account..." } else { "Create account" }
                        }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
