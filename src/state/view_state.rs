//! ViewState - Transient Table View State
//!
//! Query, column filters, sort, page and selection for one table. Created
//! with defaults when a table is built and changed only through
//! [`reduce`](super::reducer::reduce).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::components::composite::data_table::{Selection, SortDirection};

/// Owner-local view state of a DataTable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// Raw free-text query, as typed
    pub query: String,
    /// Per-column filter text, keyed by column id
    pub column_filters: BTreeMap<String, String>,
    /// Column the rows are sorted by
    pub sort_column_id: Option<String>,
    pub sort_direction: SortDirection,
    /// Requested page, 1-based
    pub page: usize,
    /// Rows per page, always positive
    pub page_size: usize,
    pub selection: Selection,
}

impl ViewState {
    /// Fresh state starting on page 1
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            column_filters: BTreeMap::new(),
            sort_column_id: None,
            sort_direction: SortDirection::Asc,
            page: 1,
            page_size: page_size.max(1),
            selection: Selection::new(),
        }
    }

    /// Current sort as `(column id, direction)`
    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.sort_column_id
            .as_deref()
            .map(|id| (id, self.sort_direction))
    }

    /// Whether the query or any column filter narrows the rows
    pub fn is_filtered(&self) -> bool {
        !self.query.trim().is_empty()
            || self.column_filters.values().any(|v| !v.trim().is_empty())
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(10)
    }
}
