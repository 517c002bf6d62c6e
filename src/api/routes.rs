//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use super::handlers::{
    categories_handler, get_by_id_handler, health_handler, list_handler, not_found_handler,
    random_handler, root_handler, status_handler, types_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - API description
/// - `GET /records` - Filtered, paginated record list
/// - `GET /records/random` - Random record
/// - `GET /records/:id` - Record by id
/// - `GET /categories` - Category table
/// - `GET /types` - Type table
/// - `GET /health` - Health check endpoint
/// - `GET /status` - Dataset and cache status
///
/// # Middleware
/// - CORS: Allows any origin
/// - Security headers: nosniff, frame denial, no referrer
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root_handler))
        .route("/records", get(list_handler))
        .route("/records/random", get(random_handler))
        .route("/records/:id", get(get_by_id_handler))
        .route("/categories", get(categories_handler))
        .route("/types", get(types_handler))
        .route("/health", get(health_handler))
        .route("/status", get(status_handler))
        .fallback(not_found_handler)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
