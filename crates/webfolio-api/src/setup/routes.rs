//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::error::HttpAppError;
use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use webfolio_core::AppError;
use std::sync::Arc;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use webfolio_core::Config;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    // Server-level concurrency cap; transcoding holds decoded frames in
    // memory, so unbounded request concurrency can exhaust the host.
    let http_concurrency_limit = std::env::var("HTTP_CONCURRENCY_LIMIT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1024)
        .max(1);

    let app = Router::new()
        .route(
            "/api/v0/uploads",
            get(handlers::upload::upload_info).post(handlers::upload::upload_folder),
        )
        .route("/health", get(health_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .nest(
            "/docs",
            utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
                .path("/docs")
                .into(),
        )
        .fallback(not_found)
        .layer(ConcurrencyLimitLayer::new(http_concurrency_limit))
        // Axum caps bodies at 2 MB by default; lift both the extractor limit
        // and the tower-http layer to the configured ceiling.
        .layer(DefaultBodyLimit::max(config.max_body_size_bytes))
        .layer(RequestBodyLimitLayer::new(config.max_body_size_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        if config.is_production() {
            return Err(anyhow::anyhow!(
                "CORS wildcard origin is not allowed in production"
            ));
        }
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}

/// JSON 404 for unknown routes, same response shape as every other error.
async fn not_found(uri: Uri) -> HttpAppError {
    HttpAppError::from(AppError::NotFound(format!("No route for {}", uri.path())))
}

/// Liveness check. The service has no external dependencies, so a response
/// is the health signal.
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "healthy"
        })),
    )
}
