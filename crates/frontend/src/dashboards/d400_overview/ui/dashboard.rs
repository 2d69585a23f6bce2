use contracts::dashboards::d400_overview::{stat_cards, DashboardStats};
use contracts::shared::fetch_state::FetchState;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::dashboards::d400_overview::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{format_count, StatCard};
use crate::shared::icons::icon;
use crate::shared::request::spawn_cancellable;
use crate::system::auth::context::session_token;

const QUICK_ACTIONS: [(&str, &str, &str); 4] = [
    ("Add Service", "/services", "server"),
    ("New Client", "/clients", "users"),
    ("View Inquiries", "/contacts", "message-square"),
    ("Analytics", "/analytics", "trending-up"),
];

/// Landing page: server counters fetched once per mount, plus shortcuts
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let stats = RwSignal::new(FetchState::<DashboardStats>::Loading);

    let token = session_token();
    spawn_cancellable(
        move |signal| async move { api::fetch_stats(&token, signal).await },
        move |result| {
            if let Err(e) = &result {
                log::error!("Failed to fetch dashboard stats: {}", e);
            }
            stats.try_update(|state| state.resolve(result));
        },
    );

    view! {
        <div class="page">
            <PageHeader
                title="Dashboard"
                subtitle="Welcome back! Here's what's happening with your IT services."
            >
                <A href="/analytics" attr:class="btn-secondary">
                    {icon("trending-up")}
                    "View Reports"
                </A>
                <A href="/clients" attr:class="btn-primary">
                    {icon("users")}
                    "Add Client"
                </A>
            </PageHeader>

            {move || stats.with(|state| match state {
                FetchState::Loading => view! {
                    <Spinner label="Loading stats..." />
                }.into_any(),
                FetchState::Failed(message) => view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        {format!("Failed to load dashboard data: {}", message)}
                    </MessageBar>
                }.into_any(),
                FetchState::Ready(data) => view! {
                    <div class="stat-grid">
                        {stat_cards(data)
                            .into_iter()
                            .map(|card| view! {
                                <StatCard
                                    title=card.title
                                    value=format_count(card.value)
                                    change=card.change
                                    trend=card.trend
                                    icon_name=card.icon
                                    color=card.color.as_str()
                                    subtitle="from last week"
                                />
                            })
                            .collect_view()}
                    </div>
                }.into_any(),
            })}

            <section class="card">
                <h2>"Quick Actions"</h2>
                <p class="text-muted">"Frequently used actions for your IT services"</p>
                <div class="quick-actions">
                    {QUICK_ACTIONS
                        .iter()
                        .map(|&(label, href, icon_name)| view! {
                            <A href=href attr:class="quick-action">
                                {icon(icon_name)}
                                <span>{label}</span>
                            </A>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
