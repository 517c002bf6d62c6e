//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint. Every handler takes the
//! current dataset from the cache, which reloads it first when stale.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};

use crate::catalog::{accessors, query, DatasetCache, Record, Taxonomy};
use crate::error::Result;
use crate::models::{
    ErrorResponse, HealthResponse, ListParams, ListResponse, RootResponse, StatusResponse,
};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Dataset cache; handlers only ever read from it
    pub cache: Arc<DatasetCache>,
    /// When the server started, for uptime reporting
    pub started_at: Instant,
    /// Deployment environment name
    pub environment: Arc<str>,
}

impl AppState {
    /// Creates a new AppState around a loaded cache.
    pub fn new(cache: DatasetCache, environment: impl Into<String>) -> Self {
        let environment: String = environment.into();
        Self {
            cache: Arc::new(cache),
            started_at: Instant::now(),
            environment: Arc::from(environment),
        }
    }
}

/// Handler for GET /
///
/// Describes the API, with example links built from the request's Host header.
pub async fn root_handler(State(state): State<AppState>, headers: HeaderMap) -> Json<RootResponse> {
    let dataset = state.cache.get_dataset().await;
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("localhost");
    let base_url = format!("http://{}", host);

    Json(RootResponse::describe(&dataset, &base_url))
}

/// Handler for GET /records
///
/// Lists records matching the query string filters, one page at a time.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<ListResponse> {
    let dataset = state.cache.get_dataset().await;
    let spec = params.into_spec();

    Json(query(&dataset, &spec).into())
}

/// Handler for GET /records/:id
pub async fn get_by_id_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record>> {
    let dataset = state.cache.get_dataset().await;
    let record = accessors::get_by_id(&dataset, &id)?;

    Ok(Json(record.clone()))
}

/// Handler for GET /records/random
pub async fn random_handler(State(state): State<AppState>) -> Result<Json<Record>> {
    let dataset = state.cache.get_dataset().await;
    let record = accessors::get_random(&dataset)?;

    Ok(Json(record.clone()))
}

/// Handler for GET /categories
pub async fn categories_handler(State(state): State<AppState>) -> Result<Json<Taxonomy>> {
    let dataset = state.cache.get_dataset().await;
    Ok(Json(accessors::get_categories(&dataset)?.clone()))
}

/// Handler for GET /types
pub async fn types_handler(State(state): State<AppState>) -> Result<Json<Taxonomy>> {
    let dataset = state.cache.get_dataset().await;
    Ok(Json(accessors::get_types(&dataset)?.clone()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let dataset = state.cache.get_dataset().await;
    let uptime = state.started_at.elapsed().as_secs();

    Json(HealthResponse::healthy(&dataset, uptime, &*state.environment))
}

/// Handler for GET /status
///
/// Reports dataset metadata and cache statistics.
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let dataset = state.cache.get_dataset().await;
    Json(StatusResponse::online(&dataset, state.cache.stats()))
}

/// Fallback for unknown routes.
pub async fn not_found_handler() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            "Route not found. See the documentation at /",
        )),
    )
}
