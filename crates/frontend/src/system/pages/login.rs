use contracts::system::forms::LoginForm;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use leptos_router::components::A;

use crate::shared::request::spawn_cancellable_in;
use crate::system::auth::api;
use crate::system::auth::context::{sign_in, Session};
use crate::system::auth::guard::RedirectIfSignedIn;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember_me, set_remember_me) = signal(true);
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let owner = Owner::current();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            remember_me: remember_me.get_untracked(),
        };
        if let Err(e) = form.validate() {
            set_error_message.set(Some(e.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let remember_me = form.remember_me;
        spawn_cancellable_in(
            owner.clone(),
            move |signal| api::login(form.email, form.password, signal),
            move |result| match result {
                Ok(response) => {
                    log::info!("Signed in as {}", response.admin.name);
                    // the guard around this page navigates to the dashboard
                    sign_in(
                        Session {
                            token: response.token,
                            admin: response.admin,
                        },
                        remember_me,
                    );
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            },
        );
    };

    view! {
        <RedirectIfSignedIn>
            <div class="login-container">
                <div class="login-box">
                    <h1>"IT Zenith"</h1>
                    <h2>"Sign in to the admin console"</h2>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit.clone()>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="admin@itzenith.com"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"Password"</label>
                            <input
                                type="password"
                                id="password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <label class="form-check">
                            <input
                                type="checkbox"
                                prop:checked=move || remember_me.get()
                                on:change=move |ev| set_remember_me.set(event_target_checked(&ev))
                            />
                            "Remember me"
                        </label>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>

                    <p class="login-info">
                        "No account yet? " <A href="/signup">"Create one"</A>
                    </p>
                </div>
            </div>
        </RedirectIfSignedIn>
    }
}
