use axum::{extract::State, Json};
use contracts::system::auth::{AdminInfo, LoginRequest, LoginResponse};

use crate::shared::data::AppState;
use crate::shared::error::{ApiError, ApiJson, ApiResult};
use crate::system::auth::extractor::CurrentAdmin;
use crate::system::auth::{jwt, password, AdminAccount};

const BAD_CREDENTIALS: &str = "Invalid email or password";

fn admin_info(admin: &AdminAccount) -> AdminInfo {
    AdminInfo {
        id: admin.id.clone(),
        name: admin.name.clone(),
        email: admin.email.clone(),
    }
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".into(),
        ));
    }

    let admin = &state.auth.admin;
    let email_matches = request.email.trim().eq_ignore_ascii_case(&admin.email);
    if !email_matches || !password::verify_password(&request.password, &admin.password_hash)? {
        tracing::warn!("Failed login attempt for {}", request.email.trim());
        return Err(ApiError::Unauthorized(BAD_CREDENTIALS.into()));
    }

    let token = jwt::generate_access_token(&state.auth, admin)?;
    tracing::info!("Admin {} signed in", admin.email);

    Ok(Json(LoginResponse {
        token,
        admin: admin_info(admin),
    }))
}

/// GET /api/admin/me
pub async fn current_admin(
    State(state): State<AppState>,
    CurrentAdmin(claims): CurrentAdmin,
) -> ApiResult<Json<AdminInfo>> {
    let admin = &state.auth.admin;
    if claims.sub != admin.id {
        return Err(ApiError::Unauthorized("Unknown administrator".into()));
    }
    Ok(Json(admin_info(admin)))
}
