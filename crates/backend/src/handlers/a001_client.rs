use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_client::{Client, ClientDraft, ClientPatch};
use contracts::domain::common::{RecordId, RecordKey};

use crate::domain::a001_client;
use crate::shared::data::AppState;
use crate::shared::error::{ApiError, ApiJson, ApiResult};

fn parse_id(id: &str) -> ApiResult<RecordId> {
    RecordId::from_string(id).map_err(ApiError::BadRequest)
}

/// GET /api/clients
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Client>> {
    Json(a001_client::service::list_all(&state.store).await)
}

/// GET /api/clients/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Client>> {
    let id = parse_id(&id)?;
    Ok(Json(a001_client::service::get_by_id(&state.store, id).await?))
}

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ClientDraft>,
) -> ApiResult<(StatusCode, Json<Client>)> {
    let client = a001_client::service::create(&state.store, draft).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// PUT /api/clients/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<ClientPatch>,
) -> ApiResult<Json<Client>> {
    let id = parse_id(&id)?;
    Ok(Json(a001_client::service::update(&state.store, id, patch).await?))
}

/// DELETE /api/clients/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    a001_client::service::delete(&state.store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
