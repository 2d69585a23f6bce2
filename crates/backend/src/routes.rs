use axum::{
    extract::OriginalUri,
    http::{header, Method},
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::data::AppState;
use crate::shared::error::ApiError;
use crate::{handlers, system};

/// All application routes, with auth, request logging and CORS applied
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api_routes(state.clone()))
        // Built console (trunk output); unknown paths get index.html for client-side routing
        .fallback_service(ServeDir::new("dist").fallback(ServeFile::new("dist/index.html")))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
        .with_state(state)
}

/// Everything under `/api`; unmatched paths answer with a JSON 404
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // ========================================
        // AUTH (PUBLIC)
        // ========================================
        .route("/admin/login", post(system::handlers::auth::login))
        .merge(protected_routes(state))
        .fallback(api_not_found)
}

async fn api_not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::NotFound(format!("No API route for {}", uri.path()))
}

/// Routes behind `require_auth`, relative to `/api`
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/me", get(system::handlers::auth::current_admin))
        // ========================================
        // DASHBOARD
        // ========================================
        .route(
            "/dashboard/stats",
            get(handlers::d400_overview::get_stats),
        )
        // ========================================
        // SERVICES
        // ========================================
        .route(
            "/services/",
            get(handlers::a002_service::list_all).post(handlers::a002_service::create),
        )
        .route(
            "/services",
            get(handlers::a002_service::list_all).post(handlers::a002_service::create),
        )
        .route(
            "/services/:id",
            put(handlers::a002_service::update).delete(handlers::a002_service::delete),
        )
        // ========================================
        // CLIENTS
        // ========================================
        .route(
            "/clients",
            get(handlers::a001_client::list_all).post(handlers::a001_client::create),
        )
        .route(
            "/clients/:id",
            get(handlers::a001_client::get_by_id)
                .put(handlers::a001_client::update)
                .delete(handlers::a001_client::delete),
        )
        // ========================================
        // INQUIRIES
        // ========================================
        .route(
            "/inquiries",
            get(handlers::a003_inquiry::list_all).post(handlers::a003_inquiry::create),
        )
        .route(
            "/inquiries/:id",
            axum::routing::delete(handlers::a003_inquiry::delete),
        )
        .route(
            "/inquiries/:id/reply",
            post(handlers::a003_inquiry::reply),
        )
        .route(
            "/inquiries/:id/archive",
            post(handlers::a003_inquiry::archive),
        )
        .route_layer(middleware::from_fn_with_state(
            state,
            system::auth::middleware::require_auth,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body, Bytes};
    use axum::http::{Request, StatusCode};
    use contracts::dashboards::d400_overview::DashboardStatsResponse;
    use contracts::domain::a002_service::Service;
    use contracts::domain::a003_inquiry::{Inquiry, InquiryStatus};
    use contracts::system::auth::{ErrorBody, LoginResponse};
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use crate::shared::config::default_config;
    use crate::shared::data::Store;
    use crate::system::initialization::build_auth_keys;

    fn app() -> Router {
        let config = default_config().unwrap();
        let auth = build_auth_keys(&config).unwrap();
        configure_routes(AppState::new(config, auth, Store::seeded()))
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Bytes) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, body)
    }

    fn json<T: DeserializeOwned>(body: &[u8]) -> T {
        serde_json::from_slice(body).unwrap()
    }

    fn request(method: &str, uri: &str, token: Option<&str>, body: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn login(app: &Router) -> String {
        let (status, body) = send(
            app,
            request(
                "POST",
                "/api/admin/login",
                None,
                Some(r#"{"email":"admin@itzenith.com","password":"admin12345"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let login: LoginResponse = json(&body);
        assert_eq!(login.admin.name, "John Doe");
        login.token
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let app = app();
        let (status, body) = send(&app, request("GET", "/health", None, None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_wrong_password_is_401_with_message() {
        let app = app();
        let (status, body) = send(
            &app,
            request(
                "POST",
                "/api/admin/login",
                None,
                Some(r#"{"email":"admin@itzenith.com","password":"nope"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let error: ErrorBody = json(&body);
        assert_eq!(error.message, "Invalid email or password");
    }

    #[tokio::test]
    async fn test_protected_routes_need_bearer() {
        let app = app();
        let (status, _) = send(&app, request("GET", "/api/dashboard/stats", None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &app,
            request("GET", "/api/services/", Some("not-a-jwt"), None),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let error: ErrorBody = json(&body);
        assert_eq!(error.message, "Invalid or expired token");
    }

    #[tokio::test]
    async fn test_dashboard_stats_shape() {
        let app = app();
        let token = login(&app).await;
        let (status, body) = send(
            &app,
            request("GET", "/api/dashboard/stats", Some(&token), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let raw: serde_json::Value = json(&body);
        assert!(raw["data"]["projects"]["last7Days"].is_u64());

        let stats: DashboardStatsResponse = json(&body);
        assert_eq!(stats.data.projects.total, 6);
        assert_eq!(stats.data.services, 6);
        assert_eq!(stats.data.team, 8);
    }

    #[tokio::test]
    async fn test_service_crud() {
        let app = app();
        let token = login(&app).await;

        let (status, body) = send(
            &app,
            request(
                "POST",
                "/api/services/",
                Some(&token),
                Some(r#"{"title":"Backup","description":"Offsite backups","icon":"database"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Service = json(&body);
        assert_eq!(created.title, "Backup");

        let (status, _) = send(
            &app,
            request(
                "POST",
                "/api/services/",
                Some(&token),
                Some(r#"{"title":"No description"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let uri = format!("/api/services/{}", created.id);
        let (status, body) = send(
            &app,
            request("PUT", &uri, Some(&token), Some(r#"{"title":"Cloud Backup"}"#)),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let updated: Service = json(&body);
        assert_eq!(updated.title, "Cloud Backup");
        assert_eq!(updated.description, "Offsite backups");

        let (status, _) = send(&app, request("DELETE", &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, request("DELETE", &uri, Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(&app, request("GET", "/api/services/", Some(&token), None)).await;
        let services: Vec<Service> = json(&body);
        assert_eq!(services.len(), 6);
    }

    #[tokio::test]
    async fn test_client_lookup_errors() {
        let app = app();
        let token = login(&app).await;

        let (status, _) = send(&app, request("DELETE", "/api/clients/3", Some(&token), None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, request("GET", "/api/clients/3", Some(&token), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorBody = json(&body);
        assert_eq!(error.message, "Record 3 not found");

        let (status, _) = send(&app, request("GET", "/api/clients/abc", Some(&token), None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_bad_bodies_answer_with_message() {
        let app = app();
        let token = login(&app).await;

        let (status, body) = send(
            &app,
            request("POST", "/api/services/", Some(&token), Some("not json")),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorBody = json(&body);
        assert!(!error.message.is_empty());

        let (status, body) = send(
            &app,
            request("POST", "/api/admin/login", None, Some("{}")),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorBody = json(&body);
        assert!(error.message.contains("email"));
    }

    #[tokio::test]
    async fn test_unknown_api_path_is_json_404() {
        let app = app();
        let (status, body) = send(&app, request("GET", "/api/nope", None, None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorBody = json(&body);
        assert_eq!(error.message, "No API route for /api/nope");
    }

    #[tokio::test]
    async fn test_inquiry_reply_and_archive() {
        let app = app();
        let token = login(&app).await;

        let (status, body) = send(
            &app,
            request(
                "POST",
                "/api/inquiries/1/reply",
                Some(&token),
                Some(r#"{"message":"Happy to help"}"#),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let inquiry: Inquiry = json(&body);
        assert_eq!(inquiry.status, InquiryStatus::Responded);

        let (status, _) = send(
            &app,
            request("POST", "/api/inquiries/1/reply", Some(&token), Some("{}")),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let (status, body) = send(
            &app,
            request("POST", "/api/inquiries/2/archive", Some(&token), None),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let inquiry: Inquiry = json(&body);
        assert_eq!(inquiry.status, InquiryStatus::Closed);
    }
}
