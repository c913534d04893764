//! DataTable Controller
//!
//! Owns the view state of one table and recomputes the
//! filtered → sorted → paginated view synchronously after every event.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;

use super::column::{Column, Columns, RowId};
use super::data_provider::DataProvider;
use super::filter::filter_rows;
use super::pagination::paginate;
use super::sort::sort_rows;
use super::value::Record;
use crate::domain::config::TableConfig;
use crate::error::{Error, Result};
use crate::eventing::{Listeners, TableNotification, channel_listener};
use crate::helpers::Debouncer;
use crate::state::{Ownership, TableEvent, ViewState, clamp_page, reduce};

/// Caller-supplied row identity
pub type RowIdFn<R> = Box<dyn Fn(&R) -> RowId + Send + Sync>;

/// Result of one recomputation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    /// Provider indices of the rows on the effective page, in display order
    pub rows: Vec<usize>,
    /// Row count after filtering
    pub filtered_count: usize,
    pub total_pages: usize,
    pub effective_page: usize,
}

/// DataTable controller
pub struct DataTable<P: DataProvider> {
    columns: Columns<P::Row>,
    provider: P,
    config: TableConfig,
    row_id: Option<RowIdFn<P::Row>>,
    state: ViewState,
    view: TableView,
    ownership: Ownership,
    listeners: Listeners,
    query_debounce: Option<Debouncer<String>>,
    warned_index_ids: bool,
}

impl<P> DataTable<P>
where
    P: DataProvider,
    P::Row: Record,
{
    /// Create a new uncontrolled table
    pub fn new(columns: Vec<Column<P::Row>>, provider: P, config: TableConfig) -> Result<Self> {
        config.validate()?;
        let state = ViewState::new(config.default_page_size);
        let query_debounce = (config.search_debounce_ms > 0)
            .then(|| Debouncer::new(Duration::from_millis(config.search_debounce_ms)));

        let mut table = Self {
            columns: Columns::new(columns),
            provider,
            config,
            row_id: None,
            state,
            view: TableView::default(),
            ownership: Ownership::Uncontrolled,
            listeners: Listeners::new(),
            query_debounce,
            warned_index_ids: false,
        };
        table.view = table.compute_view(&table.state);
        tracing::debug!(
            columns = table.columns.len(),
            rows = table.provider.len(),
            "Created data table"
        );
        Ok(table)
    }

    /// Identify rows with `f` instead of their index in the unfiltered data
    pub fn with_row_id(mut self, f: impl Fn(&P::Row) -> RowId + Send + Sync + 'static) -> Self {
        self.row_id = Some(Box::new(f));
        self
    }

    /// Choose who owns the view state
    pub fn with_ownership(mut self, ownership: Ownership) -> Self {
        self.ownership = ownership;
        self
    }

    /// Hand the view state to the host; `on_change` receives every proposed state
    pub fn controlled(self, on_change: impl FnMut(&ViewState) + Send + 'static) -> Self {
        self.with_ownership(Ownership::controlled(on_change))
    }

    /// Register a notification listener
    pub fn on_notification(
        mut self,
        listener: impl FnMut(&TableNotification) + Send + 'static,
    ) -> Self {
        self.listeners.push(listener);
        self
    }

    /// Forward notifications into a channel
    pub fn notify_channel(self, tx: Sender<TableNotification>) -> Self {
        self.on_notification(channel_listener(tx))
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn columns(&self) -> &Columns<P::Row> {
        &self.columns
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn is_controlled(&self) -> bool {
        self.ownership.is_controlled()
    }

    pub fn effective_page(&self) -> usize {
        self.view.effective_page
    }

    pub fn total_pages(&self) -> usize {
        self.view.total_pages
    }

    pub fn filtered_count(&self) -> usize {
        self.view.filtered_count
    }

    /// Rows on the effective page, in display order
    pub fn visible_rows(&self) -> impl Iterator<Item = &P::Row> {
        self.view.rows.iter().filter_map(|&index| self.provider.row(index))
    }

    /// Identifier of the row at `index` in the unfiltered data
    pub fn row_id(&self, index: usize) -> Option<RowId> {
        let row = self.provider.row(index)?;
        Some(match &self.row_id {
            Some(f) => f(row),
            None => index.to_string(),
        })
    }

    /// Identifiers of the rows on the effective page
    pub fn visible_ids(&self) -> Vec<RowId> {
        self.view
            .rows
            .iter()
            .filter_map(|&index| self.row_id(index))
            .collect()
    }

    /// Selected ids in selection order
    pub fn selected_ids(&self) -> Vec<RowId> {
        self.state.selection.to_vec()
    }

    /// Apply one interaction and recompute the view
    pub fn dispatch(&mut self, event: TableEvent) -> &TableView {
        if !self.accepts(&event) {
            return &self.view;
        }
        tracing::debug!(interaction = ?event.interaction(), ?event, "Dispatching table event");
        let next = reduce(&self.state, &event);
        self.commit(next);
        &self.view
    }

    /// Replace the query immediately, dropping any debounced edit
    pub fn set_query(&mut self, query: impl Into<String>) -> &TableView {
        if let Some(debounce) = self.query_debounce.as_mut() {
            debounce.cancel();
        }
        self.dispatch(TableEvent::SetQuery(query.into()))
    }

    /// Record a keystroke in the search box.
    ///
    /// With debouncing configured the edit is held until [`flush_query`]
    /// sees the input quiet; otherwise it applies at once.
    ///
    /// [`flush_query`]: Self::flush_query
    pub fn type_query(&mut self, query: impl Into<String>, now: Instant) -> &TableView {
        match self.query_debounce.as_mut() {
            Some(debounce) => {
                debounce.push(query.into(), now);
                &self.view
            }
            None => self.dispatch(TableEvent::SetQuery(query.into())),
        }
    }

    /// Apply a debounced query edit if the quiet period has passed.
    /// Returns whether an edit was applied.
    pub fn flush_query(&mut self, now: Instant) -> bool {
        let Some(query) = self.query_debounce.as_mut().and_then(|d| d.poll(now)) else {
            return false;
        };
        self.dispatch(TableEvent::SetQuery(query));
        true
    }

    /// Apply a debounced query edit now, without waiting (Enter in the search box).
    /// Returns whether an edit was applied.
    pub fn submit_query(&mut self) -> bool {
        let Some(query) = self.query_debounce.as_mut().and_then(Debouncer::flush) else {
            return false;
        };
        self.dispatch(TableEvent::SetQuery(query));
        true
    }

    /// Whether a typed query is still waiting out the debounce delay
    pub fn has_pending_query(&self) -> bool {
        self.query_debounce
            .as_ref()
            .is_some_and(Debouncer::is_pending)
    }

    pub fn set_column_filter(
        &mut self,
        column_id: impl Into<String>,
        value: impl Into<String>,
    ) -> &TableView {
        self.dispatch(TableEvent::SetColumnFilter {
            column_id: column_id.into(),
            value: value.into(),
        })
    }

    pub fn clear_filters(&mut self) -> &TableView {
        self.dispatch(TableEvent::ClearFilters)
    }

    /// Header click: same column flips direction, a new column sorts ascending
    pub fn toggle_sort(&mut self, column_id: impl Into<String>) -> &TableView {
        self.dispatch(TableEvent::SortBy(column_id.into()))
    }

    pub fn clear_sort(&mut self) -> &TableView {
        self.dispatch(TableEvent::ClearSort)
    }

    pub fn set_page(&mut self, page: usize) -> &TableView {
        self.dispatch(TableEvent::SetPage(page))
    }

    pub fn next_page(&mut self) -> &TableView {
        self.dispatch(TableEvent::NextPage)
    }

    pub fn previous_page(&mut self) -> &TableView {
        self.dispatch(TableEvent::PreviousPage)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> &TableView {
        if !self.config.page_size_options.contains(&page_size) {
            tracing::debug!(page_size, "Page size is not one of the configured options");
        }
        self.dispatch(TableEvent::SetPageSize(page_size))
    }

    pub fn toggle_row(&mut self, id: impl Into<RowId>) -> &TableView {
        self.dispatch(TableEvent::ToggleRow(id.into()))
    }

    /// Toggle the row at a 1-based position on the current page
    pub fn toggle_row_at(&mut self, position: usize) -> &TableView {
        let id = position
            .checked_sub(1)
            .and_then(|offset| self.view.rows.get(offset).copied())
            .and_then(|index| self.row_id(index));
        match id {
            Some(id) => self.dispatch(TableEvent::ToggleRow(id)),
            None => {
                tracing::debug!(position, "No row at position");
                &self.view
            }
        }
    }

    /// "Select all": toggles only the rows on the current page
    pub fn toggle_visible_rows(&mut self) -> &TableView {
        let ids = self.visible_ids();
        self.dispatch(TableEvent::ToggleRows(ids))
    }

    pub fn clear_selection(&mut self) -> &TableView {
        self.dispatch(TableEvent::ClearSelection)
    }

    /// Replace the rows. Selection persists; the page is clamped to the new data.
    pub fn set_rows(&mut self, provider: P) -> &TableView {
        self.provider = provider;
        let view = self.compute_view(&self.state);
        let next = clamp_page(self.state.clone(), view.total_pages);
        if next != self.state {
            self.ownership.propose(&next);
        }
        self.adopt(next, view);
        &self.view
    }

    /// Adopt a state pushed by the host of a controlled table
    pub fn set_state(&mut self, mut state: ViewState) -> Result<()> {
        if !self.ownership.is_controlled() {
            return Err(Error::ControlledState {
                message: "set_state called on an uncontrolled table".to_string(),
            });
        }
        state.page_size = state.page_size.max(1);
        let view = self.compute_view(&state);
        let clamped = clamp_page(state.clone(), view.total_pages);
        if clamped != state {
            self.ownership.propose(&clamped);
        }
        self.adopt(clamped, view);
        Ok(())
    }

    fn accepts(&mut self, event: &TableEvent) -> bool {
        match event {
            TableEvent::SortBy(column_id) => match self.columns.get(column_id) {
                Some(column) if column.is_sortable() => true,
                Some(_) => {
                    tracing::debug!(column = %column_id, "Ignoring sort on unsortable column");
                    false
                }
                None => {
                    tracing::debug!(column = %column_id, "Ignoring sort on unknown column");
                    false
                }
            },
            TableEvent::SetColumnFilter { column_id, .. } => {
                if !self.config.column_filters_enabled {
                    tracing::debug!(column = %column_id, "Column filters are disabled");
                    return false;
                }
                let searchable = self
                    .columns
                    .get(column_id)
                    .is_some_and(|column| column.has_accessor());
                if !searchable {
                    tracing::debug!(column = %column_id, "Ignoring filter on unsearchable column");
                }
                searchable
            }
            TableEvent::ToggleRow(_) | TableEvent::ToggleRows(_) | TableEvent::ClearSelection => {
                if !self.config.enable_row_selection {
                    tracing::debug!("Row selection is disabled");
                    return false;
                }
                if self.row_id.is_none() && !self.warned_index_ids {
                    tracing::warn!("Selecting rows without a row id function; using row indices");
                    self.warned_index_ids = true;
                }
                true
            }
            _ => true,
        }
    }

    fn compute_view(&self, state: &ViewState) -> TableView {
        let no_filters = BTreeMap::new();
        let column_filters = if self.config.column_filters_enabled {
            &state.column_filters
        } else {
            &no_filters
        };

        let mut indices = filter_rows(&self.provider, &self.columns, &state.query, column_filters);
        let sort_column = state
            .sort_column_id
            .as_deref()
            .and_then(|id| self.columns.get(id))
            .filter(|column| column.has_accessor());
        sort_rows(&self.provider, sort_column, state.sort_direction, &mut indices);

        let window = paginate(indices.len(), state.page, state.page_size);
        tracing::debug!(
            filtered = indices.len(),
            page = window.page,
            total_pages = window.total_pages,
            "Recomputed table view"
        );
        TableView {
            rows: indices[window.start..window.end].to_vec(),
            filtered_count: indices.len(),
            total_pages: window.total_pages,
            effective_page: window.page,
        }
    }

    fn commit(&mut self, next: ViewState) {
        let view = self.compute_view(&next);
        let next = clamp_page(next, view.total_pages);
        if next == self.state {
            return;
        }
        if self.ownership.is_controlled() {
            self.ownership.propose(&next);
        } else {
            self.adopt(next, view);
        }
    }

    fn adopt(&mut self, next: ViewState, view: TableView) {
        let previous_state = std::mem::replace(&mut self.state, next);
        let previous_view = std::mem::replace(&mut self.view, view);

        let mut notifications = Vec::new();
        if previous_state.sort() != self.state.sort() {
            notifications.push(TableNotification::sort(
                self.state.sort_column_id.as_deref(),
                self.state.sort_direction,
            ));
        }
        if previous_state.selection != self.state.selection {
            notifications.push(TableNotification::selection(self.state.selection.to_vec()));
        }
        if (previous_view.effective_page, previous_view.total_pages)
            != (self.view.effective_page, self.view.total_pages)
        {
            notifications.push(TableNotification::page(
                self.view.effective_page,
                self.view.total_pages,
            ));
        }
        for notification in &notifications {
            self.listeners.emit(notification);
        }
    }
}

impl<P> std::fmt::Debug for DataTable<P>
where
    P: DataProvider,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("rows", &self.provider.len())
            .field("state", &self.state)
            .field("view", &self.view)
            .field("ownership", &self.ownership)
            .finish()
    }
}
