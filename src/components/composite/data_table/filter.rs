//! Search Filter
//!
//! Reduces the row collection to the rows matching the free-text query
//! and any per-column filters.

use std::collections::BTreeMap;

use super::column::Columns;
use super::data_provider::DataProvider;
use super::value::Record;
use crate::helpers::{contains_normalized, normalize_query};

/// Return the indices of rows matching `query` and every column filter,
/// in input order.
///
/// A row matches the query when any searchable column's stringified value
/// contains it. A row matches a column filter when that column's value
/// contains the filter text. Blank queries and filters match everything;
/// filters naming unknown or accessor-less columns are ignored.
pub fn filter_rows<P>(
    provider: &P,
    columns: &Columns<P::Row>,
    query: &str,
    column_filters: &BTreeMap<String, String>,
) -> Vec<usize>
where
    P: DataProvider,
    P::Row: Record,
{
    let query = normalize_query(query);
    let filters: Vec<_> = column_filters
        .iter()
        .filter_map(|(id, raw)| {
            let needle = normalize_query(raw);
            if needle.is_empty() {
                return None;
            }
            match columns.get(id) {
                Some(column) if column.has_accessor() => Some((column, needle)),
                _ => {
                    tracing::debug!(column = %id, "Ignoring filter for unsearchable column");
                    None
                }
            }
        })
        .collect();

    if query.is_empty() && filters.is_empty() {
        return (0..provider.len()).collect();
    }

    provider
        .iter()
        .filter(|(_, row)| {
            let query_match = query.is_empty()
                || columns
                    .searchable()
                    .any(|column| contains_normalized(&column.search_text(row), &query));
            query_match
                && filters
                    .iter()
                    .all(|(column, needle)| contains_normalized(&column.search_text(row), needle))
        })
        .map(|(index, _)| index)
        .collect()
}
