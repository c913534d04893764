//! Render Model
//!
//! Everything a front end needs to draw the table for the current view,
//! plus a plain-text rendering of it.

use super::column::{ColumnWidth, RowId};
use super::data_provider::DataProvider;
use super::data_table::DataTable;
use super::pagination::Pagination;
use super::selection::SelectAllState;
use super::value::Record;
use crate::utils::format::{char_width, pad_right, truncate};

/// Label of the header checkbox
pub const SELECT_ALL_LABEL: &str = "Select all rows";

/// Indicator shown on sortable columns that are not the sorted one
pub const UNSORTED_INDICATOR: &str = "↕";

const SELECT_COLUMN_WIDTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub column_id: String,
    pub label: String,
    pub sortable: bool,
    /// ▲, ▼ or ↕; `None` for columns that don't sort
    pub indicator: Option<&'static str>,
    pub width: ColumnWidth,
}

impl HeaderCell {
    /// Label with its sort indicator appended
    pub fn title(&self) -> String {
        match self.indicator {
            Some(indicator) => format!("{} {indicator}", self.label),
            None => self.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectAllCell {
    pub state: SelectAllState,
    pub label: &'static str,
}

/// Per-column filter input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInput {
    pub column_id: String,
    pub placeholder: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub id: RowId,
    /// 1-based position on the current page
    pub position: usize,
    /// Checkbox state; `None` when row selection is off
    pub selected: Option<bool>,
    pub select_label: Option<String>,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<RenderedRow>),
    /// Single placeholder row spanning every column
    Empty { message: String, colspan: usize },
}

/// Snapshot of the table for drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRender {
    pub search_placeholder: String,
    pub query: String,
    pub header: Vec<HeaderCell>,
    pub select_all: Option<SelectAllCell>,
    /// Empty unless column filters are enabled
    pub filters: Vec<FilterInput>,
    pub body: TableBody,
    pub pagination: Pagination,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl<P> DataTable<P>
where
    P: DataProvider,
    P::Row: Record,
{
    /// Build the render model for the current view
    pub fn render(&self) -> TableRender {
        let config = self.config();
        let state = self.state();
        let selection_enabled = config.enable_row_selection;

        let header = self
            .columns()
            .iter()
            .map(|column| {
                let sortable = column.is_sortable();
                let indicator = match state.sort() {
                    _ if !sortable => None,
                    Some((id, direction)) if id == column.id => Some(direction.indicator()),
                    _ => Some(UNSORTED_INDICATOR),
                };
                HeaderCell {
                    column_id: column.id.clone(),
                    label: column.header.clone(),
                    sortable,
                    indicator,
                    width: column.width,
                }
            })
            .collect::<Vec<_>>();

        let filters = if config.column_filters_enabled {
            self.columns()
                .searchable()
                .map(|column| FilterInput {
                    column_id: column.id.clone(),
                    placeholder: format!("Filter {}", column.header.to_lowercase()),
                    value: state
                        .column_filters
                        .get(&column.id)
                        .cloned()
                        .unwrap_or_default(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let visible_ids = self.visible_ids();
        let select_all = selection_enabled.then(|| SelectAllCell {
            state: state.selection.select_all_state(&visible_ids),
            label: SELECT_ALL_LABEL,
        });

        let rows = self
            .view()
            .rows
            .iter()
            .zip(visible_ids.iter())
            .enumerate()
            .filter_map(|(offset, (&index, id))| {
                let row = self.provider().row(index)?;
                let position = offset + 1;
                Some(RenderedRow {
                    id: id.clone(),
                    position,
                    selected: selection_enabled.then(|| state.selection.contains(id)),
                    select_label: selection_enabled.then(|| format!("Select row {position}")),
                    cells: self
                        .columns()
                        .iter()
                        .map(|column| column.render_cell(row))
                        .collect(),
                })
            })
            .collect::<Vec<_>>();

        let body = if rows.is_empty() {
            TableBody::Empty {
                message: config.empty_message.clone(),
                colspan: self.columns().len() + usize::from(selection_enabled),
            }
        } else {
            TableBody::Rows(rows)
        };

        let mut pagination = Pagination::new(
            self.effective_page(),
            self.total_pages(),
            self.filtered_count(),
        )
        .visible_items(self.view().rows.len());
        if selection_enabled {
            pagination = pagination.selected_items(state.selection.len());
        }

        TableRender {
            search_placeholder: config.search_placeholder.clone(),
            query: state.query.clone(),
            header,
            select_all,
            filters,
            body,
            pagination,
            page_size: state.page_size,
            page_size_options: config.page_size_options.clone(),
        }
    }
}

impl TableRender {
    /// Column widths for text output, selection column excluded
    fn text_widths(&self) -> Vec<usize> {
        self.header
            .iter()
            .enumerate()
            .map(|(i, cell)| match cell.width {
                ColumnWidth::Fixed(width) => width.max(1),
                ColumnWidth::Auto => {
                    let widest_cell = match &self.body {
                        TableBody::Rows(rows) => rows
                            .iter()
                            .filter_map(|row| row.cells.get(i))
                            .map(|text| char_width(text))
                            .max()
                            .unwrap_or(0),
                        TableBody::Empty { .. } => 0,
                    };
                    char_width(&cell.title()).max(widest_cell)
                }
            })
            .collect()
    }

    /// Aligned plain-text table
    pub fn to_text(&self) -> String {
        let widths = self.text_widths();
        let mut all_widths = Vec::with_capacity(widths.len() + 1);
        if self.select_all.is_some() {
            all_widths.push(SELECT_COLUMN_WIDTH);
        }
        all_widths.extend_from_slice(&widths);
        // the placeholder row must fit inside the frame
        if let TableBody::Empty { message, .. } = &self.body {
            let overflow = char_width(message).saturating_sub(inner_width(&all_widths));
            if let Some(last) = all_widths.last_mut() {
                *last += overflow;
            }
        }

        let separator = format!(
            "+{}+",
            all_widths
                .iter()
                .map(|w| "-".repeat(w + 2))
                .collect::<Vec<_>>()
                .join("+")
        );
        let line = |cells: Vec<String>| -> String {
            let padded = cells
                .iter()
                .zip(all_widths.iter())
                .map(|(text, &width)| pad_right(&truncate(text, width), width))
                .collect::<Vec<_>>();
            format!("| {} |", padded.join(" | "))
        };

        let mut out = Vec::new();
        let search = if self.query.is_empty() {
            format!("[{}]", self.search_placeholder)
        } else {
            format!("[{}]", self.query)
        };
        out.push(search);

        let active_filters = self
            .filters
            .iter()
            .filter(|f| !f.value.is_empty())
            .map(|f| format!("{}: {}", f.placeholder, f.value))
            .collect::<Vec<_>>();
        if !active_filters.is_empty() {
            out.push(active_filters.join(", "));
        }

        out.push(separator.clone());
        let mut header = Vec::new();
        if let Some(select_all) = &self.select_all {
            header.push(checkbox(select_all.state).to_string());
        }
        header.extend(self.header.iter().map(HeaderCell::title));
        out.push(line(header));
        out.push(separator.clone());

        match &self.body {
            TableBody::Rows(rows) => {
                for row in rows {
                    let mut cells = Vec::with_capacity(row.cells.len() + 1);
                    if let Some(selected) = row.selected {
                        let state = if selected {
                            SelectAllState::Checked
                        } else {
                            SelectAllState::Unchecked
                        };
                        cells.push(checkbox(state).to_string());
                    }
                    cells.extend(row.cells.iter().cloned());
                    out.push(line(cells));
                }
            }
            TableBody::Empty { message, .. } => {
                out.push(format!("| {} |", pad_right(message, inner_width(&all_widths))));
            }
        }
        out.push(separator);
        out.push(format!(
            "{}    {}",
            self.pagination.summary(),
            self.pagination.page_label()
        ));
        out.join("\n")
    }
}

/// Width between the outer borders of a row
fn inner_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1)
}

fn checkbox(state: SelectAllState) -> &'static str {
    match state {
        SelectAllState::Unchecked => "[ ]",
        SelectAllState::Indeterminate => "[-]",
        SelectAllState::Checked => "[x]",
    }
}
