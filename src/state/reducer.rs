//! Reducer - ViewState Transitions
//!
//! `reduce(state, event) -> state` is pure. It does not know the row count,
//! so page bounds are enforced afterwards by [`clamp_page`] once the view
//! has been recomputed.

use crate::components::composite::data_table::{RowId, SortDirection, pagination};

use super::view_state::ViewState;

/// User interactions on a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Query edited
    SetQuery(String),
    /// Column filter edited; blank text removes the filter
    SetColumnFilter { column_id: String, value: String },
    /// Reset query and column filters
    ClearFilters,
    /// Sortable header clicked
    SortBy(String),
    ClearSort,
    SetPage(usize),
    NextPage,
    PreviousPage,
    SetPageSize(usize),
    ToggleRow(RowId),
    /// "Select all" for the rows currently on the page
    ToggleRows(Vec<RowId>),
    ClearSelection,
}

/// Which part of the view an event touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Filtering,
    Sorting,
    Paginating,
    Selecting,
}

impl TableEvent {
    pub fn interaction(&self) -> Interaction {
        match self {
            TableEvent::SetQuery(_)
            | TableEvent::SetColumnFilter { .. }
            | TableEvent::ClearFilters => Interaction::Filtering,
            TableEvent::SortBy(_) | TableEvent::ClearSort => Interaction::Sorting,
            TableEvent::SetPage(_)
            | TableEvent::NextPage
            | TableEvent::PreviousPage
            | TableEvent::SetPageSize(_) => Interaction::Paginating,
            TableEvent::ToggleRow(_) | TableEvent::ToggleRows(_) | TableEvent::ClearSelection => {
                Interaction::Selecting
            }
        }
    }
}

/// Apply one event to a state
pub fn reduce(state: &ViewState, event: &TableEvent) -> ViewState {
    let mut next = state.clone();
    match event {
        TableEvent::SetQuery(query) => {
            if *query != next.query {
                next.query = query.clone();
                next.page = 1;
            }
        }
        TableEvent::SetColumnFilter { column_id, value } => {
            let previous = next.column_filters.get(column_id).map(String::as_str).unwrap_or("");
            if previous != value.as_str() {
                if value.is_empty() {
                    next.column_filters.remove(column_id);
                } else {
                    next.column_filters.insert(column_id.clone(), value.clone());
                }
                next.page = 1;
            }
        }
        TableEvent::ClearFilters => {
            next.query.clear();
            next.column_filters.clear();
            next.page = 1;
        }
        TableEvent::SortBy(column_id) => {
            if next.sort_column_id.as_deref() == Some(column_id.as_str()) {
                next.sort_direction = next.sort_direction.toggled();
            } else {
                next.sort_column_id = Some(column_id.clone());
                next.sort_direction = SortDirection::Asc;
            }
        }
        TableEvent::ClearSort => {
            next.sort_column_id = None;
            next.sort_direction = SortDirection::Asc;
        }
        TableEvent::SetPage(page) => next.page = (*page).max(1),
        TableEvent::NextPage => next.page = next.page.saturating_add(1),
        TableEvent::PreviousPage => next.page = next.page.saturating_sub(1).max(1),
        TableEvent::SetPageSize(size) => {
            next.page_size = (*size).max(1);
            next.page = 1;
        }
        TableEvent::ToggleRow(id) => next.selection.toggle(id.clone()),
        TableEvent::ToggleRows(ids) => next.selection.toggle_all(ids),
        TableEvent::ClearSelection => next.selection.clear(),
    }
    next
}

/// Correct the requested page to the effective page for `total_pages`
pub fn clamp_page(mut state: ViewState, total_pages: usize) -> ViewState {
    state.page = pagination::clamp_page(state.page, total_pages);
    state
}
