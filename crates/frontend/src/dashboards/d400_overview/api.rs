use contracts::dashboards::d400_overview::{parse_stats_response, DashboardStats};
use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::shared::api_utils::{api_url, bearer};

/// Counters for the dashboard cards. `signal` aborts the request when it fires.
pub async fn fetch_stats(token: &str, signal: Option<AbortSignal>) -> Result<DashboardStats, String> {
    let response = Request::get(&api_url("/api/dashboard/stats"))
        .header("Authorization", &bearer(token))
        .abort_signal(signal.as_ref())
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    parse_stats_response(response.status(), &body)
}
