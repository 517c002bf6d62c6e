//! Response DTOs for the catalog API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{CacheStats, Dataset, QueryResult, Record};

/// Routes served by the API, as listed on `/status`.
pub const ENDPOINTS: &[&str] = &[
    "GET /",
    "GET /records",
    "GET /records/:id",
    "GET /records/random",
    "GET /categories",
    "GET /types",
    "GET /health",
    "GET /status",
];

/// Response body for the list endpoint (GET /records)
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    /// Number of matching records before pagination
    pub total: usize,
    /// Page number that was served
    pub page: usize,
    pub total_pages: usize,
    pub results: Vec<Record>,
}

impl From<QueryResult<'_>> for ListResponse {
    fn from(result: QueryResult<'_>) -> Self {
        Self {
            total: result.total,
            page: result.page,
            total_pages: result.total_pages,
            results: result.results.into_iter().cloned().collect(),
        }
    }
}

// == Root ==

/// A query parameter of the list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ParamDoc {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
}

/// Documentation of one endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointDoc {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParamDoc>,
}

/// Example links and a pointer to interactive tools.
#[derive(Debug, Clone, Serialize)]
pub struct Documentation {
    pub message: &'static str,
    pub example_links: BTreeMap<&'static str, String>,
}

/// Response body for the root endpoint (GET /)
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: String,
    pub total_records: usize,
    pub documentation: Documentation,
    pub endpoints: BTreeMap<&'static str, EndpointDoc>,
}

impl RootResponse {
    /// Builds the self-description, with example links rooted at `base_url`.
    pub fn describe(dataset: &Dataset, base_url: &str) -> Self {
        let link = |path: &str| format!("{}{}", base_url, path);
        let example_links = BTreeMap::from([
            ("all_records", link("/records")),
            ("record_by_id", link("/records/10")),
            ("random_record", link("/records/random")),
            ("list_categories", link("/categories")),
            ("list_types", link("/types")),
            ("search_by_name", link("/records?name=Greedy")),
            ("filter_by_category", link("/records?category=Rare")),
            ("pagination", link("/records?limit=5&page=2")),
        ]);

        let endpoints = BTreeMap::from([
            (
                "List records",
                EndpointDoc {
                    method: "GET",
                    path: "/records",
                    description: "Returns a filtered, paginated list of records.",
                    parameters: vec![
                        ParamDoc {
                            name: "name",
                            kind: "string",
                            description: "Filters by part of the record name.",
                        },
                        ParamDoc {
                            name: "category",
                            kind: "string",
                            description: "Filters by category (Common, Uncommon, Rare, Legendary).",
                        },
                        ParamDoc {
                            name: "type",
                            kind: "string",
                            description: "Filters by effect type (+c, +m, Xm, ...).",
                        },
                        ParamDoc {
                            name: "limit",
                            kind: "integer",
                            description: "Results per page (default: 10).",
                        },
                        ParamDoc {
                            name: "page",
                            kind: "integer",
                            description: "Page number (default: 1).",
                        },
                    ],
                },
            ),
            (
                "Get record by id",
                EndpointDoc {
                    method: "GET",
                    path: "/records/:id",
                    description: "Returns a single record by its numeric id.",
                    parameters: vec![ParamDoc {
                        name: "id",
                        kind: "integer",
                        description: "Unique record id.",
                    }],
                },
            ),
            (
                "Get random record",
                EndpointDoc {
                    method: "GET",
                    path: "/records/random",
                    description: "Returns a random record.",
                    parameters: Vec::new(),
                },
            ),
            (
                "List categories",
                EndpointDoc {
                    method: "GET",
                    path: "/categories",
                    description: "Returns every category and its description.",
                    parameters: Vec::new(),
                },
            ),
            (
                "List types",
                EndpointDoc {
                    method: "GET",
                    path: "/types",
                    description: "Returns every effect type and its description.",
                    parameters: Vec::new(),
                },
            ),
        ]);

        Self {
            message: "Welcome to the catalog API!",
            version: dataset.version().to_string(),
            total_records: dataset.len(),
            documentation: Documentation {
                message: "For an interactive experience, use a tool such as Postman or Insomnia.",
                example_links,
            },
            endpoints,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status ("OK")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime_seconds: u64,
    pub version: String,
    pub total_records: usize,
    pub environment: String,
}

impl HealthResponse {
    /// Creates a healthy response for the given dataset.
    pub fn healthy(dataset: &Dataset, uptime_seconds: u64, environment: impl Into<String>) -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime_seconds,
            version: dataset.version().to_string(),
            total_records: dataset.len(),
            environment: environment.into(),
        }
    }
}

/// Response body for the status endpoint (GET /status)
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub api_status: &'static str,
    pub version: String,
    pub updated_at: String,
    pub total_records: usize,
    pub endpoints: &'static [&'static str],
    pub cache: CacheStats,
}

impl StatusResponse {
    pub fn online(dataset: &Dataset, cache: CacheStats) -> Self {
        Self {
            api_status: "online",
            version: dataset.version().to_string(),
            updated_at: dataset.updated_at().to_string(),
            total_records: dataset.len(),
            endpoints: ENDPOINTS,
            cache,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Meta, Record};

    fn dataset() -> Dataset {
        let mut dataset = Dataset::from_records(vec![Record::new(1, "Joker")]);
        dataset.meta = Meta {
            version: Some("3.0".to_string()),
            updated_at: None,
        };
        dataset
    }

    #[test]
    fn test_list_response_serialize() {
        let resp = ListResponse {
            total: 1,
            page: 1,
            total_pages: 1,
            results: vec![],
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["total_pages"], 1);
        assert!(json["results"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_root_response_links() {
        let resp = RootResponse::describe(&dataset(), "http://localhost:3000");
        assert_eq!(resp.version, "3.0");
        assert_eq!(resp.total_records, 1);
        assert_eq!(
            resp.documentation.example_links["random_record"],
            "http://localhost:3000/records/random"
        );
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["endpoints"]["Get random record"].get("parameters").is_none());
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy(&dataset(), 12, "test");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"OK\""));
        assert!(json.contains("timestamp"));
        assert!(json.contains("\"environment\":\"test\""));
    }

    #[test]
    fn test_status_response_defaults() {
        let resp = StatusResponse::online(&dataset(), CacheStats::default());
        assert_eq!(resp.updated_at, "N/A");
        assert_eq!(resp.endpoints.len(), 8);
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
