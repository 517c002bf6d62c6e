//! Query Engine
//!
//! Filters and paginates the records of a dataset.

use serde::Serialize;

use crate::catalog::{Dataset, Record};

/// Page size used when none (or an invalid one) is supplied.
pub const DEFAULT_PAGE_SIZE: usize = 10;

// == Query Spec ==
/// Resolved parameters of one list query.
///
/// Filters are stored as supplied; empty strings are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    /// Case-insensitive exact category
    pub category: Option<String>,
    /// Exact effect type, percent-encoded
    pub kind: Option<String>,
    pub page_size: usize,
    pub page: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            name: None,
            category: None,
            kind: None,
            page_size: DEFAULT_PAGE_SIZE,
            page: 1,
        }
    }
}

impl QuerySpec {
    /// Builds a spec from raw request values, coercing paging input.
    ///
    /// Missing, non-numeric or non-positive `limit` falls back to
    /// [`DEFAULT_PAGE_SIZE`]; the same for `page` falls back to 1.
    pub fn from_raw(
        name: Option<String>,
        category: Option<String>,
        kind: Option<String>,
        limit: Option<&str>,
        page: Option<&str>,
    ) -> Self {
        Self {
            name: non_empty(name),
            category: non_empty(category),
            kind: non_empty(kind),
            page_size: positive_or(limit, DEFAULT_PAGE_SIZE),
            page: positive_or(page, 1),
        }
    }
}

// == Query Result ==
/// One page of matching records plus totals.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult<'a> {
    /// Matches before pagination
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub results: Vec<&'a Record>,
}

// == Query ==
/// Applies the filters of `spec` to `dataset`, then slices out the requested page.
///
/// Never fails: a page past the end yields an empty `results`.
pub fn query<'a>(dataset: &'a Dataset, spec: &QuerySpec) -> QueryResult<'a> {
    let name = spec.name.as_deref().map(str::to_lowercase);
    let category = spec.category.as_deref().map(str::to_lowercase);
    let kind = spec.kind.as_deref().map(decode);

    let matches: Vec<&Record> = dataset
        .records
        .iter()
        .filter(|r| {
            name.as_deref()
                .map_or(true, |n| r.name.to_lowercase().contains(n))
        })
        .filter(|r| {
            category.as_deref().map_or(true, |c| {
                r.category().is_some_and(|rc| rc.to_lowercase() == c)
            })
        })
        .filter(|r| {
            kind.as_deref()
                .map_or(true, |k| r.kind() == Some(k))
        })
        .collect();

    let total = matches.len();
    let page_size = spec.page_size.max(1);
    let page = spec.page.max(1);
    let start = (page - 1).saturating_mul(page_size);

    let results = matches.into_iter().skip(start).take(page_size).collect();

    QueryResult {
        total,
        page,
        total_pages: total.div_ceil(page_size),
        results,
    }
}

// == Input Coercion ==
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parses the value as a positive integer, returning `default` otherwise.
fn positive_or(raw: Option<&str>, default: usize) -> usize {
    match raw.and_then(parse_leading_int) {
        Some(n) if n > 0 => n as usize,
        _ => default,
    }
}

/// Lenient integer parse: skips leading whitespace, accepts an optional sign,
/// then reads digits up to the first non-digit (`"5abc"` → 5).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Percent-decodes a filter value, keeping the raw text if it does not decode to UTF-8.
fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
