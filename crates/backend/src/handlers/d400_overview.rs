use axum::{extract::State, Json};
use chrono::Utc;
use contracts::dashboards::d400_overview::DashboardStatsResponse;

use crate::dashboards::d400_overview::service;
use crate::shared::data::AppState;

/// GET /api/dashboard/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<DashboardStatsResponse> {
    let data = service::get_stats(&state.store, &state.config.dashboard, Utc::now()).await;
    Json(DashboardStatsResponse { data })
}
