//! Dataset Accessors
//!
//! Single-record lookups and taxonomy tables.

use crate::catalog::{Dataset, Record, Taxonomy};
use crate::error::{CatalogError, Result};

/// Looks up a record by its id, given as raw request text.
///
/// Text that is not an integer is an [`CatalogError::InvalidArgument`];
/// a well-formed id with no matching record is [`CatalogError::NotFound`].
pub fn get_by_id<'a>(dataset: &'a Dataset, raw_id: &str) -> Result<&'a Record> {
    let id: i64 = raw_id.trim().parse().map_err(|_| {
        CatalogError::InvalidArgument(format!("'{}' is not a valid id", raw_id))
    })?;

    dataset
        .records
        .iter()
        .find(|r| r.id == id)
        .ok_or(CatalogError::NotFound(id))
}

/// Picks a record uniformly at random.
pub fn get_random(dataset: &Dataset) -> Result<&Record> {
    if dataset.records.is_empty() {
        return Err(CatalogError::Empty);
    }
    let index = fastrand::usize(..dataset.records.len());
    Ok(&dataset.records[index])
}

pub fn get_categories(dataset: &Dataset) -> Result<&Taxonomy> {
    dataset
        .categories
        .as_ref()
        .ok_or(CatalogError::Unavailable("Category"))
}

pub fn get_types(dataset: &Dataset) -> Result<&Taxonomy> {
    dataset
        .types
        .as_ref()
        .ok_or(CatalogError::Unavailable("Type"))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn jokers() -> Dataset {
        let mut dataset = Dataset::from_records(vec![
            Record::new(1, "Joker"),
            Record::new(2, "Greedy Joker"),
        ]);
        dataset.types = Some(Taxonomy::from([("+m".to_string(), "Adds mult".to_string())]));
        dataset
    }

    #[test]
    fn test_get_by_id_found() {
        let dataset = jokers();
        let record = get_by_id(&dataset, "2").unwrap();
        assert_eq!(record.name, "Greedy Joker");
    }

    #[test]
    fn test_get_by_id_not_found() {
        let dataset = jokers();
        let result = get_by_id(&dataset, "99");
        assert!(matches!(result, Err(CatalogError::NotFound(99))));
    }

    #[test]
    fn test_get_by_id_invalid() {
        let dataset = jokers();
        for raw in ["abc", "", "1.5", "random"] {
            let result = get_by_id(&dataset, raw);
            assert!(
                matches!(result, Err(CatalogError::InvalidArgument(_))),
                "{:?} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_get_by_id_is_idempotent() {
        let dataset = jokers();
        let first = get_by_id(&dataset, "1").unwrap();
        let second = get_by_id(&dataset, "1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_get_random_empty() {
        let dataset = Dataset::default();
        assert!(matches!(get_random(&dataset), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_get_random_returns_member() {
        let dataset = jokers();
        for _ in 0..50 {
            let record = get_random(&dataset).unwrap();
            assert!(dataset.records.contains(record));
        }
    }

    #[test]
    fn test_taxonomies() {
        let dataset = jokers();
        assert!(matches!(
            get_categories(&dataset),
            Err(CatalogError::Unavailable("Category"))
        ));
        assert_eq!(get_types(&dataset).unwrap().len(), 1);
    }
}
