use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contracts::domain::a003_inquiry::{Inquiry, InquiryDraft, ReplyRequest};
use contracts::domain::common::{RecordId, RecordKey};

use crate::domain::a003_inquiry;
use crate::shared::data::AppState;
use crate::shared::error::{ApiError, ApiJson, ApiResult};

fn parse_id(id: &str) -> ApiResult<RecordId> {
    RecordId::from_string(id).map_err(ApiError::BadRequest)
}

/// GET /api/inquiries
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Inquiry>> {
    Json(a003_inquiry::service::list_all(&state.store).await)
}

/// POST /api/inquiries
pub async fn create(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<InquiryDraft>,
) -> ApiResult<(StatusCode, Json<Inquiry>)> {
    let inquiry = a003_inquiry::service::create(&state.store, draft).await?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// DELETE /api/inquiries/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    a003_inquiry::service::delete(&state.store, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/inquiries/:id/reply
pub async fn reply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<ReplyRequest>,
) -> ApiResult<Json<Inquiry>> {
    let id = parse_id(&id)?;
    Ok(Json(
        a003_inquiry::service::reply(&state.store, id, &request.message).await?,
    ))
}

/// POST /api/inquiries/:id/archive
pub async fn archive(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Inquiry>> {
    let id = parse_id(&id)?;
    Ok(Json(a003_inquiry::service::archive(&state.store, id).await?))
}
