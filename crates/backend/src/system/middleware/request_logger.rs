use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Duration;

use crate::shared::format::format_number;

/// Middleware that prints one line per request to the console:
/// local time, duration, response size, status, method and path.
///
/// Successful responses get a cyan timestamp, everything else yellow.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // The body is buffered to learn its real size
    let (size, body) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (Some(bytes.len()), Body::from(bytes)),
        Err(_) => (None, Body::default()),
    };

    println!(
        "{}",
        log_line(parts.status, &method, &path, start.elapsed(), size)
    );
    tracing::debug!(status = parts.status.as_u16(), %method, %path, "request served");

    Response::from_parts(parts, body)
}

fn log_line(
    status: StatusCode,
    method: &Method,
    path: &str,
    elapsed: Duration,
    size: Option<usize>,
) -> String {
    let color_code = if status.is_success() && size.is_some() {
        "36"
    } else {
        "33"
    };
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());

    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        elapsed.as_millis(),
        size,
        status.as_u16(),
        method,
        path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_line_fields() {
        let line = log_line(
            StatusCode::CREATED,
            &Method::POST,
            "/api/services/",
            Duration::from_millis(12),
            Some(2048),
        );
        assert!(line.starts_with("\x1b[36m"));
        assert!(line.contains("2.048"));
        assert!(line.contains("201"));
        assert!(line.ends_with("POST /api/services/"));
    }

    #[test]
    fn test_failed_body_read_is_flagged() {
        let line = log_line(
            StatusCode::OK,
            &Method::GET,
            "/health",
            Duration::ZERO,
            None,
        );
        assert!(line.starts_with("\x1b[33m"));
        assert!(line.contains("error"));
    }
}
