use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-violet-600 hover:bg-violet-700 text-white shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-violet-500"
            }
            ButtonVariant::Ghost => {
                "text-gray-700 hover:text-gray-900 hover:bg-gray-100"
            }
        }
    }
}

/// Submit/action button with a built-in pending spinner. Pending actions
/// disable the button, which is the only double-submit mitigation the app
/// carries.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-medium transition-colors duration-150 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Labeled text input bound to a writable signal. Shared by the auth forms.
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-gray-700">
                {label}
            </label>
            <input
                id=id
                name=id
                type=input_type
                class="mt-1 appearance-none block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm placeholder-gray-400 focus:outline-none focus:ring-violet-500 focus:border-violet-500 sm:text-sm"
                prop:value=value
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
