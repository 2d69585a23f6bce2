use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders `children` only while signed in; otherwise redirects to `redirect_to`
/// (`/login` by default).
#[component]
pub fn RequireAuth(
    #[prop(optional, into)] redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let (session, _) = use_auth();
    let redirect_to = StoredValue::new(redirect_to.unwrap_or_else(|| "/login".to_string()));

    view! {
        <Show
            when=move || session.with(Option::is_some)
            fallback=move || view! { <Redirect path=redirect_to.get_value() /> }
        >
            {children()}
        </Show>
    }
}

/// Opposite of [`RequireAuth`]: pages like login and signup send a signed-in
/// administrator to the dashboard.
#[component]
pub fn RedirectIfSignedIn(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_auth();

    view! {
        <Show
            when=move || session.with(Option::is_none)
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}
