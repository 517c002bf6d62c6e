//! Catalog Record Module
//!
//! Defines the records served by the API and the dataset they are loaded into.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// == Taxonomy ==
/// Name → description table (categories, types). Not interpreted by the core.
pub type Taxonomy = BTreeMap<String, String>;

// == Record ==
/// A single catalog entry.
///
/// Only `id` and `name` are required. Every other attribute, `category` and
/// `type` included, is kept in `extra` exactly as it appeared in the source
/// and serialized back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique numeric identifier
    pub id: i64,
    /// Display name, never empty
    pub name: String,
    /// Pass-through attributes
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Creates a record with no optional attributes.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.extra
            .insert("category".to_string(), Value::String(category.into()));
        self
    }

    /// Sets the effect type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.extra
            .insert("type".to_string(), Value::String(kind.into()));
        self
    }

    /// Category (rarity) used by the `category` filter, when it is a string.
    pub fn category(&self) -> Option<&str> {
        self.extra.get("category").and_then(Value::as_str)
    }

    /// Effect type used by the `type` filter, when it is a string.
    pub fn kind(&self) -> Option<&str> {
        self.extra.get("type").and_then(Value::as_str)
    }
}

// == Meta ==
/// Dataset-level metadata. Fields that are not strings in the source are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Meta {
    pub version: Option<String>,
    pub updated_at: Option<String>,
}

// == Dataset ==
/// The fully loaded catalog: valid records plus metadata and taxonomy tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Records that passed validation, in source order
    pub records: Vec<Record>,
    pub meta: Meta,
    pub categories: Option<Taxonomy>,
    pub types: Option<Taxonomy>,
    /// Number of raw records dropped during validation
    pub dropped_records: usize,
}

impl Dataset {
    /// Creates a dataset from records alone, without metadata or taxonomies.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Dataset version, `"1.0"` when the source carries none.
    pub fn version(&self) -> &str {
        self.meta.version.as_deref().unwrap_or("1.0")
    }

    /// Last update timestamp as written in the source, `"N/A"` when absent.
    pub fn updated_at(&self) -> &str {
        self.meta.updated_at.as_deref().unwrap_or("N/A")
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_passes_extra_fields_through() {
        let raw = json!({
            "id": 7,
            "name": "Joker",
            "category": "Common",
            "type": "+m",
            "effect": "+4 Mult",
            "cost": 2
        });
        let record: Record = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.kind(), Some("+m"));
        assert_eq!(record.category(), Some("Common"));
        assert_eq!(record.extra.get("cost"), Some(&json!(2)));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_record_keeps_non_string_attributes() {
        let raw = json!({
            "id": 3,
            "name": "Blueprint",
            "category": null,
            "type": ["+m", "Xm"]
        });
        let record: Record = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(record.category(), None);
        assert_eq!(record.kind(), None);
        assert_eq!(serde_json::to_value(&record).unwrap(), raw);
    }

    #[test]
    fn test_record_optional_fields_omitted() {
        let record = Record::new(1, "Joker");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!({"id": 1, "name": "Joker"}));
    }

    #[test]
    fn test_dataset_meta_defaults() {
        let dataset = Dataset::default();
        assert_eq!(dataset.version(), "1.0");
        assert_eq!(dataset.updated_at(), "N/A");
        assert!(dataset.is_empty());
    }
}
