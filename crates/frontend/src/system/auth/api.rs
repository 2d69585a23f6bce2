use contracts::system::auth::{AdminInfo, LoginRequest, LoginResponse};
use gloo_net::http::Request;
use web_sys::AbortSignal;

use crate::shared::api_utils::{api_url, bearer};
use crate::shared::request::failure_message;

/// Login with email and password.
///
/// On failure the error is the server's `message` (e.g. "Invalid email or password").
pub async fn login(
    email: String,
    password: String,
    signal: Option<AbortSignal>,
) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url("/api/admin/login"))
        .abort_signal(signal.as_ref())
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(failure_message(&response, "Login failed").await);
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Profile behind a token; `Ok(None)` when the server no longer accepts the token.
pub async fn get_current_admin(
    token: &str,
    signal: Option<AbortSignal>,
) -> Result<Option<AdminInfo>, String> {
    let response = Request::get(&api_url("/api/admin/me"))
        .header("Authorization", &bearer(token))
        .abort_signal(signal.as_ref())
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 401 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(failure_message(&response, "Get current admin failed").await);
    }

    response
        .json::<AdminInfo>()
        .await
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
