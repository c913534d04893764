//! Sort Comparator
//!
//! Orders filtered row indices by one column. The sort is stable: rows
//! with equal keys keep their relative input order in both directions.

use serde::{Deserialize, Serialize};

use super::column::Column;
use super::data_provider::DataProvider;
use super::value::{Record, SortKey};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Header indicator glyph
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

/// Sort `indices` in place by `column`. `None` keeps the input order.
pub fn sort_rows<P>(
    provider: &P,
    column: Option<&Column<P::Row>>,
    direction: SortDirection,
    indices: &mut Vec<usize>,
) where
    P: DataProvider,
    P::Row: Record,
{
    let Some(column) = column else {
        return;
    };

    let mut keyed: Vec<(SortKey, usize)> = indices
        .iter()
        .map(|&index| {
            let key = provider
                .row(index)
                .and_then(|row| column.value(row))
                .unwrap_or_default()
                .sort_key();
            (key, index)
        })
        .collect();

    // slice::sort_by is stable
    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = a.compare(b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    *indices = keyed.into_iter().map(|(_, index)| index).collect();
}
