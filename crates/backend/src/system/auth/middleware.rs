use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::shared::data::AppState;
use crate::shared::error::ApiError;

/// Middleware that requires a valid `Authorization: Bearer <jwt>` header
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".into()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthorized("Missing bearer token".into()))?;

    let claims = super::jwt::validate_token(&state.auth, token).map_err(|e| {
        tracing::debug!("Rejected token: {:#}", e);
        ApiError::Unauthorized("Invalid or expired token".into())
    })?;

    // Add claims to request extensions for use in handlers
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
