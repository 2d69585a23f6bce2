use crate::layout::ShellContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Header() -> impl IntoView {
    let shell = expect_context::<ShellContext>();
    let (session, _) = use_auth();

    let admin_name = move || {
        session.with(|s| {
            s.as_ref()
                .map(|s| s.admin.name.clone())
                .unwrap_or_else(|| "Admin".to_string())
        })
    };
    let today = chrono::Local::now().format("%A, %B %-d, %Y").to_string();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button
                    class="button button--ghost header__menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| shell.sidebar_open.update(|open| *open = !*open)
                >
                    {"☰"}
                </button>
                <div>
                    <span class="header__title">{move || format!("Welcome back, {}", admin_name())}</span>
                    <div class="header__subtitle">{today}</div>
                </div>
            </div>
            <div class="header__actions">
                <span class="header__bell" title="Notifications">{icon("bell")}</span>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| sign_out()>
                    {icon("log-out")}
                    "Logout"
                </Button>
            </div>
        </header>
    }
}
