//! Dataset Loader
//!
//! Parses the raw source bytes, validates records and builds a [`Dataset`].

use serde_json::{Map, Value};
use tracing::warn;

use crate::catalog::{Dataset, Meta, Record, Taxonomy};
use crate::error::LoadError;

/// Field holding the record list.
const RECORDS_FIELD: &str = "records";

// == Load ==
/// Builds a dataset from source bytes.
///
/// Fails with [`LoadError::Parse`] when the bytes are not JSON and with
/// [`LoadError::Schema`] when the document has no `records` array. Invalid
/// records are dropped, not reported as errors; the count ends up in
/// [`Dataset::dropped_records`]. Metadata and taxonomy tables of an
/// unexpected shape are treated as absent.
pub fn load(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let document: Value = serde_json::from_slice(bytes)?;
    let Value::Object(mut root) = document else {
        return Err(LoadError::Schema("document is not an object".to_string()));
    };

    let raw_records = match root.remove(RECORDS_FIELD) {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(LoadError::Schema(format!(
                "document has no '{}' array",
                RECORDS_FIELD
            )))
        }
    };

    let total = raw_records.len();
    let records: Vec<Record> = raw_records.into_iter().filter_map(validate).collect();
    let dropped = total - records.len();
    if dropped > 0 {
        warn!("{} records were dropped because they are incomplete", dropped);
    }

    let meta = meta(root.get("meta"));

    Ok(Dataset {
        records,
        meta,
        categories: taxonomy(&mut root, "categories"),
        types: taxonomy(&mut root, "types"),
        dropped_records: dropped,
    })
}

// == Validation ==
/// Returns the record when it has a non-zero integer `id` and a non-empty `name`.
fn validate(raw: Value) -> Option<Record> {
    let fields = raw.as_object()?;
    if !has_id(fields) || !has_name(fields) {
        return None;
    }
    serde_json::from_value(raw).ok()
}

fn has_id(fields: &Map<String, Value>) -> bool {
    matches!(fields.get("id").and_then(Value::as_i64), Some(id) if id != 0)
}

fn has_name(fields: &Map<String, Value>) -> bool {
    matches!(fields.get("name").and_then(Value::as_str), Some(name) if !name.is_empty())
}

/// Reads `version` and `updated_at`, keeping only string values.
fn meta(raw: Option<&Value>) -> Meta {
    let text = |key: &str| {
        raw.and_then(|m| m.get(key))
            .and_then(Value::as_str)
            .map(str::to_string)
    };
    Meta {
        version: text("version"),
        updated_at: text("updated_at"),
    }
}

/// Extracts an optional name → description table.
fn taxonomy(root: &mut Map<String, Value>, field: &str) -> Option<Taxonomy> {
    match root.remove(field) {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value(value) {
            Ok(table) => Some(table),
            Err(e) => {
                warn!("Ignoring malformed '{}' table: {}", field, e);
                None
            }
        },
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bytes(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_load_full_document() {
        let source = bytes(json!({
            "records": [
                {"id": 1, "name": "Joker", "category": "Common", "type": "+m"},
                {"id": 2, "name": "Greedy Joker", "category": "Common", "type": "+m"}
            ],
            "meta": {"version": "2.1", "updated_at": "2024-05-01"},
            "categories": {"Common": "Found often"},
            "types": {"+m": "Adds mult"}
        }));

        let dataset = load(&source).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.version(), "2.1");
        assert_eq!(dataset.updated_at(), "2024-05-01");
        assert_eq!(
            dataset.categories.unwrap().get("Common").map(String::as_str),
            Some("Found often")
        );
        assert_eq!(dataset.types.unwrap().len(), 1);
        assert_eq!(dataset.dropped_records, 0);
    }

    #[test]
    fn test_load_drops_incomplete_records() {
        let source = bytes(json!({
            "records": [
                {"id": 1, "name": "Joker"},
                {"id": 2},
                {"name": "No Id"},
                {"id": 0, "name": "Zero"},
                {"id": 3, "name": ""},
                {"id": "4", "name": "Text Id"},
                "not an object",
                {"id": 6, "name": "Banner"}
            ]
        }));

        let dataset = load(&source).unwrap();
        let ids: Vec<i64> = dataset.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 6]);
        assert_eq!(dataset.dropped_records, 6);
    }

    #[test]
    fn test_load_keeps_records_with_odd_attributes() {
        let source = bytes(json!({
            "records": [
                {"id": 1, "name": "Joker", "type": ["+m", "Xm"]},
                {"id": 2, "name": "Greedy", "category": 7},
                {"id": 3, "name": "Banner", "category": null}
            ]
        }));

        let dataset = load(&source).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.dropped_records, 0);
        assert_eq!(dataset.records[0].extra["type"], json!(["+m", "Xm"]));
        assert_eq!(dataset.records[1].category(), None);
        assert_eq!(dataset.records[2].extra["category"], Value::Null);
    }

    #[test]
    fn test_load_lenient_meta() {
        let source = bytes(json!({
            "records": [{"id": 1, "name": "Joker"}],
            "meta": {"version": 2, "updated_at": {"day": 1}}
        }));

        let dataset = load(&source).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.version(), "1.0");
        assert_eq!(dataset.updated_at(), "N/A");

        let dataset = load(br#"{"records": [], "meta": "v3"}"#).unwrap();
        assert_eq!(dataset.version(), "1.0");
    }

    #[test]
    fn test_load_optional_tables_absent() {
        let dataset = load(br#"{"records": []}"#).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.categories.is_none());
        assert!(dataset.types.is_none());
        assert_eq!(dataset.version(), "1.0");
    }

    #[test]
    fn test_load_invalid_json() {
        let result = load(b"{ not json");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_load_missing_records() {
        let result = load(br#"{"meta": {"version": "1"}}"#);
        assert!(matches!(result, Err(LoadError::Schema(_))));
    }

    #[test]
    fn test_load_records_not_a_list() {
        let result = load(br#"{"records": {"id": 1, "name": "Joker"}}"#);
        assert!(matches!(result, Err(LoadError::Schema(_))));
    }

    #[test]
    fn test_load_top_level_array() {
        let result = load(br#"[{"id": 1, "name": "Joker"}]"#);
        assert!(matches!(result, Err(LoadError::Schema(_))));
    }

    #[test]
    fn test_load_malformed_taxonomy_is_absent() {
        let source = br#"{"records": [], "categories": {"Rare": "Seldom"}, "types": ["+m", "Xm"]}"#;
        let dataset = load(source).unwrap();
        assert!(dataset.types.is_none());
        assert_eq!(dataset.categories.unwrap().len(), 1);
    }
}
