use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <h2>"Page not found"</h2>
            <p class="not-found__path">
                {move || format!("Nothing lives at {}", location.pathname.get())}
            </p>
            <A href="/" attr:class="btn-primary">"Back to dashboard"</A>
        </div>
    }
}
