//! API utilities for frontend-backend communication

/// Backend base URL baked in at compile time, e.g. `ADMIN_API_BASE=https://api.example.com`.
const CONFIGURED_API_BASE: Option<&str> = option_env!("ADMIN_API_BASE");

/// Port the development API server listens on when no base is configured.
const DEFAULT_API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Uses `ADMIN_API_BASE` when it was set at build time, otherwise the current window
/// location with the backend port, like `http://localhost:3000`.
/// Empty string if window is not available.
pub fn api_base() -> String {
    if let Some(base) = CONFIGURED_API_BASE.filter(|b| !b.trim().is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Value of the `Authorization` header for a session token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
