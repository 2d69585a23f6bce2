use contracts::system::forms::SignupForm;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::system::auth::guard::RedirectIfSignedIn;

/// Registration form. There is no signup endpoint: a valid form only reports
/// success locally.
#[component]
pub fn SignupPage() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agree_to_terms = RwSignal::new(false);

    let error_message = RwSignal::new(Option::<String>::None);
    let submitted = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = SignupForm {
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            agree_to_terms: agree_to_terms.get_untracked(),
        };
        match form.validate() {
            Ok(()) => {
                log::info!("Signup form accepted for {}", form.email);
                error_message.set(None);
                submitted.set(true);
            }
            Err(e) => error_message.set(Some(e.to_string())),
        }
    };

    let text_field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form-group">
                <label for=id>{label}</label>
                <input
                    type=kind
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <RedirectIfSignedIn>
            <div class="login-container">
                <div class="login-box">
                    <h1>"IT Zenith"</h1>
                    <h2>"Create an account"</h2>

                    <Show
                        when=move || submitted.get()
                        fallback=move || view! {
                            <Show when=move || error_message.get().is_some()>
                                <div class="error-message">
                                    {move || error_message.get().unwrap_or_default()}
                                </div>
                            </Show>

                            <form on:submit=on_submit>
                                <div class="form-row">
                                    {text_field("first-name", "First name", "text", first_name)}
                                    {text_field("last-name", "Last name", "text", last_name)}
                                </div>
                                {text_field("email", "Email", "email", email)}
                                {text_field("password", "Password", "password", password)}
                                {text_field("confirm-password", "Confirm password", "password", confirm_password)}

                                <label class="form-check">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || agree_to_terms.get()
                                        on:change=move |ev| agree_to_terms.set(event_target_checked(&ev))
                                    />
                                    "I agree to the terms and conditions"
                                </label>

                                <button type="submit" class="btn-primary">"Create account"</button>
                            </form>
                        }
                    >
                        <div class="success-message">
                            "Account created successfully! You can now sign in."
                        </div>
                    </Show>

                    <p class="login-info">
                        "Already have an account? " <A href="/login">"Sign in"</A>
                    </p>
                </div>
            </div>
        </RedirectIfSignedIn>
    }
}
