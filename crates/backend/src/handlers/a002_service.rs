use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a002_service::{Service, ServiceDraft, ServiceId, ServicePatch};
use contracts::domain::common::RecordKey;

use crate::domain::a002_service;
use crate::shared::data::AppState;
use crate::shared::error::{ApiError, ApiJson, ApiResult};

fn parse_id(id: &str) -> ApiResult<ServiceId> {
    ServiceId::from_string(id).map_err(ApiError::BadRequest)
}

/// GET /api/services/
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(a002_service::service::list_all(&state.store).await)
}

/// POST /api/services/
pub async fn create(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ServiceDraft>,
) -> ApiResult<(StatusCode, Json<Service>)> {
    let service = a002_service::service::create(&state.store, draft).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/services/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<ServicePatch>,
) -> ApiResult<Json<Service>> {
    let id = parse_id(&id)?;
    Ok(Json(a002_service::service::update(&state.store, &id, patch).await?))
}

/// DELETE /api/services/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    a002_service::service::delete(&state.store, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
