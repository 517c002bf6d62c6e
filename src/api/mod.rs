//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /` - API description
//! - `GET /records` - List records with filters and pagination
//! - `GET /records/:id` - Record by id
//! - `GET /records/random` - Random record
//! - `GET /categories`, `GET /types` - Taxonomy tables
//! - `GET /health`, `GET /status` - Health and status

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
