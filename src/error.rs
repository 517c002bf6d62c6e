//! Error types for the catalog server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Load Error Enum ==
/// Failure to turn the source into a dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source could not be read
    #[error("Failed to read source: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not valid JSON
    #[error("Failed to parse source: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document does not have the expected shape
    #[error("Invalid source document: {0}")]
    Schema(String),
}

// == Catalog Error Enum ==
/// Errors surfaced to API clients.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No record with the requested id
    #[error("Record with id {0} not found")]
    NotFound(i64),

    /// Client supplied a malformed argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The dataset has no records
    #[error("No records are available at the moment")]
    Empty,

    /// An optional dataset table is missing
    #[error("{0} information is not available")]
    Unavailable(&'static str),

    /// The dataset could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl CatalogError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CatalogError::Empty => StatusCode::SERVICE_UNAVAILABLE,
            CatalogError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
