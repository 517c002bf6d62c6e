//! Request DTOs for the catalog API
//!
//! Defines the query parameters accepted by the list endpoint.

use serde::Deserialize;

use crate::catalog::QuerySpec;

/// Query string of `GET /records`
///
/// Every field is an optional string so that malformed paging values
/// fall back to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// Substring of the record name
    #[serde(default)]
    pub name: Option<String>,
    /// Exact category
    #[serde(default)]
    pub category: Option<String>,
    /// Exact effect type
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Page size
    #[serde(default)]
    pub limit: Option<String>,
    /// Page number, 1-based
    #[serde(default)]
    pub page: Option<String>,
}

impl ListParams {
    /// Resolves the raw parameters into a query spec.
    pub fn into_spec(self) -> QuerySpec {
        QuerySpec::from_raw(
            self.name,
            self.category,
            self.kind,
            self.limit.as_deref(),
            self.page.as_deref(),
        )
    }
}
