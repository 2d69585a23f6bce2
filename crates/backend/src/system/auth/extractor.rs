use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use contracts::system::auth::TokenClaims;

use crate::shared::error::ApiError;

/// Claims of the administrator whose bearer token `require_auth` accepted.
/// Rejects with 401 on routes mounted outside that middleware.
pub struct CurrentAdmin(pub TokenClaims);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(CurrentAdmin)
            .ok_or_else(|| ApiError::Unauthorized("Not signed in".into()))
    }
}
