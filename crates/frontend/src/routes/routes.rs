use crate::dashboards::d400_overview::ui::dashboard::OverviewDashboard;
use crate::dashboards::d401_analytics::ui::dashboard::AnalyticsDashboard;
use crate::domain::a001_client::ui::list::ClientList;
use crate::domain::a002_service::ui::list::ServiceList;
use crate::domain::a003_inquiry::ui::list::InquiryList;
use crate::layout::AdminShell;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFound;
use crate::system::pages::settings::SettingsPage;
use crate::system::pages::signup::SignupPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

/// URL map of the console. Everything under the shell needs a session; any other
/// path renders the not-found page.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
                <ParentRoute path=path!("") view=AdminShell>
                    <Route path=path!("/") view=OverviewDashboard />
                    <Route path=path!("/services") view=ServiceList />
                    <Route path=path!("/clients") view=ClientList />
                    <Route path=path!("/contacts") view=InquiryList />
                    <Route path=path!("/analytics") view=AnalyticsDashboard />
                    <Route path=path!("/settings") view=SettingsPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
