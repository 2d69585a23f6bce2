pub mod header;
pub mod left;
pub mod notifications;

pub use notifications::{use_notifications, NotificationService};

use crate::system::auth::guard::RequireAuth;
use header::Header;
use left::Sidebar;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use notifications::NotificationHost;

/// State shared by the shell's parts (the mobile menu toggle)
#[derive(Clone, Copy)]
pub struct ShellContext {
    pub sidebar_open: RwSignal<bool>,
}

/// Frame of every signed-in page.
///
/// ```text
/// +-----------+------------------------------+
/// |           |  Header                      |
/// |  Sidebar  +------------------------------+
/// |           |  routed page (Outlet)        |
/// +-----------+------------------------------+
/// ```
#[component]
pub fn AdminShell() -> impl IntoView {
    provide_context(ShellContext {
        sidebar_open: RwSignal::new(false),
    });

    view! {
        <RequireAuth>
            <div class="app-layout">
                <Sidebar />
                <div class="app-main">
                    <Header />
                    <NotificationHost />
                    <main class="app-content">
                        <Outlet />
                    </main>
                </div>
            </div>
        </RequireAuth>
    }
}
