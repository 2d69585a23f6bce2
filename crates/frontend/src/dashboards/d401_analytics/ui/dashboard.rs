use contracts::dashboards::d400_overview::Trend;
use contracts::dashboards::d401_analytics::{
    bar_percent, client_activity, client_distribution, financial_summary, key_metrics,
    service_metrics, system_health,
};
use contracts::shared::money::format_usd;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;

const SERVICE_DOTS: [&str; 5] = ["primary", "success", "warning", "error", "muted"];

/// Static performance overview: key metrics, revenue per service, monthly activity,
/// client mix, system health and the financial summary
#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let services = service_metrics();
    let service_max = services.iter().map(|s| s.revenue).max().unwrap_or(0);
    let months = client_activity();
    let month_max = months.iter().map(|m| m.revenue).max().unwrap_or(0);

    view! {
        <div class="page">
            <PageHeader
                title="Analytics"
                subtitle="Comprehensive insights into your IT services performance"
            />

            <div class="stat-grid">
                {key_metrics()
                    .into_iter()
                    .map(|metric| {
                        let arrow = match metric.trend {
                            Trend::Up => "trending-up",
                            Trend::Down => "trending-down",
                        };
                        view! {
                            <div class="stat-card">
                                <div class="stat-card__icon">{icon(metric.icon)}</div>
                                <div class="stat-card__content">
                                    <div class="stat-card__label">{metric.title}</div>
                                    <div class="stat-card__value">{metric.value}</div>
                                    <span class="stat-card__change stat-card__change--up">
                                        {icon(arrow)}
                                        {metric.description}
                                    </span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="analytics-grid">
                <section class="card">
                    <h2>{icon("bar-chart")}"Revenue Trends"</h2>
                    <p class="text-muted">"Monthly revenue and client growth"</p>
                    {months
                        .into_iter()
                        .map(|m| view! {
                            <div class="bar-row">
                                <span class="bar-row__label">{m.month}</span>
                                <div class="bar-row__text">
                                    <div>{format!("{} Clients", m.clients)}</div>
                                    <div class="text-muted">{format!("{} Revenue", format_usd(m.revenue))}</div>
                                </div>
                                <div class="bar">
                                    <div
                                        class="bar__fill"
                                        style=format!("width: {}%", bar_percent(m.revenue, month_max))
                                    ></div>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </section>

                <section class="card">
                    <h2>{icon("activity")}"Service Performance"</h2>
                    <p class="text-muted">"Revenue breakdown by service type"</p>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Service"</TableHeaderCell>
                                <TableHeaderCell>"Clients"</TableHeaderCell>
                                <TableHeaderCell>"Revenue"</TableHeaderCell>
                                <TableHeaderCell>"Growth"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {services
                                .into_iter()
                                .enumerate()
                                .map(|(index, s)| {
                                    let dot = format!("dot dot--{}", SERVICE_DOTS[index.min(SERVICE_DOTS.len() - 1)]);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <span class=dot></span>
                                                {s.name}
                                            </TableCell>
                                            <TableCell>{s.clients}</TableCell>
                                            <TableCell>
                                                <div>{format_usd(s.revenue)}</div>
                                                <div class="bar bar--thin">
                                                    <div
                                                        class="bar__fill"
                                                        style=format!("width: {}%", bar_percent(s.revenue, service_max))
                                                    ></div>
                                                </div>
                                            </TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                                    {s.growth}
                                                </Badge>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                </section>
            </div>

            <div class="analytics-grid analytics-grid--thirds">
                <section class="card">
                    <h2>{icon("users")}"Client Distribution"</h2>
                    {client_distribution()
                        .into_iter()
                        .enumerate()
                        .map(|(index, segment)| {
                            let fill = format!(
                                "bar__fill bar__fill--{}",
                                SERVICE_DOTS[index.min(SERVICE_DOTS.len() - 1)]
                            );
                            view! {
                                <div class="summary-row">
                                    <span>{segment.name}</span>
                                    <div class="bar bar--thin bar--short">
                                        <div
                                            class=fill
                                            style=format!("width: {}%", segment.share_percent)
                                        ></div>
                                    </div>
                                    <span class="summary-row__value">
                                        {format!("{}%", segment.share_percent)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </section>

                <section class="card">
                    <h2>{icon("activity")}"System Health"</h2>
                    {system_health()
                        .into_iter()
                        .map(|check| view! {
                            <div class="summary-row">
                                <span>{check.name}</span>
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                                    {check.status}
                                </Badge>
                            </div>
                        })
                        .collect_view()}
                </section>

                <section class="card">
                    <h2>{icon("dollar-sign")}"Financial Summary"</h2>
                    {financial_summary()
                        .lines()
                        .into_iter()
                        .map(|line| view! {
                            <div class="summary-row">
                                <span class="text-muted">{line.label}</span>
                                <span
                                    class="summary-row__value"
                                    class:text-success=line.positive
                                >
                                    {line.value}
                                </span>
                            </div>
                        })
                        .collect_view()}
                </section>
            </div>
        </div>
    }
}
