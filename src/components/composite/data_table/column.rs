//! Column Definition
//!
//! Defines table columns: how a value is read from a row, whether the
//! column can be sorted, and how its cells are displayed.

use ahash::AHashMap;

use super::value::{CellValue, Record};
use crate::domain::config::ColumnConfig;
use crate::error::{Error, Result};

/// Row identifier used for selection
pub type RowId = String;

/// Derivation function for computed column values
pub type DeriveFn<R> = Box<dyn Fn(&R) -> CellValue + Send + Sync>;

/// Custom cell formatter
pub type FormatFn<R> = Box<dyn Fn(&R) -> String + Send + Sync>;

/// How a column reads its value from a row
pub enum Accessor<R> {
    /// Read a named field through [`Record::field`]
    Field(String),
    /// Compute the value from the whole row
    Derive(DeriveFn<R>),
}

impl<R> std::fmt::Debug for Accessor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Accessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Accessor::Derive(_) => f.write_str("Derive(..)"),
        }
    }
}

/// Column width used by the text renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Size to the widest cell
    #[default]
    Auto,
    /// Fixed width in characters; longer content is truncated
    Fixed(usize),
}

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier, unique within a table
    pub id: String,
    /// Column header label
    pub header: String,
    /// Value accessor. Columns without one are neither searchable nor sortable.
    pub accessor: Option<Accessor<R>>,
    /// Whether the column header toggles sorting
    pub sortable: bool,
    /// Custom cell formatter
    pub render: Option<FormatFn<R>>,
    /// Text renderer width
    pub width: ColumnWidth,
}

impl<R> Column<R> {
    /// Create a new column with no accessor
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor: None,
            sortable: false,
            render: None,
            width: ColumnWidth::default(),
        }
    }

    /// Read the value from a named field
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.accessor = Some(Accessor::Field(name.into()));
        self
    }

    /// Derive the value from the row
    pub fn derive(mut self, f: impl Fn(&R) -> CellValue + Send + Sync + 'static) -> Self {
        self.accessor = Some(Accessor::Derive(Box::new(f)));
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Use a custom cell formatter
    pub fn render(mut self, f: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Box::new(f));
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: usize) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Field column described by a config entry
    pub fn from_config(config: &ColumnConfig) -> Self {
        let mut column = Self::new(config.id.clone(), config.header()).field(config.field());
        column.sortable = config.sortable;
        if let Some(width) = config.width {
            column = column.fixed_width(width);
        }
        column
    }

    /// Whether the column contributes a value to search and sort
    pub fn has_accessor(&self) -> bool {
        self.accessor.is_some()
    }

    /// Whether clicking the header sorts by this column
    pub fn is_sortable(&self) -> bool {
        self.sortable && self.has_accessor()
    }
}

impl<R: Record> Column<R> {
    /// Resolve the column's value for a row. `None` when the column has no accessor.
    pub fn value(&self, row: &R) -> Option<CellValue> {
        match self.accessor.as_ref()? {
            Accessor::Field(name) => Some(row.field(name)),
            Accessor::Derive(f) => Some(f(row)),
        }
    }

    /// Stringified value used for search; absent values are `""`
    pub fn search_text(&self, row: &R) -> String {
        self.value(row)
            .map(|value| value.to_display_string())
            .unwrap_or_default()
    }

    /// Render a cell: the custom formatter if present, else the stringified value
    pub fn render_cell(&self, row: &R) -> String {
        match &self.render {
            Some(render) => render(row),
            None => self.search_text(row),
        }
    }
}

impl<R> std::fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("accessor", &self.accessor)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .field("width", &self.width)
            .finish()
    }
}

/// Ordered column registry with lookup by id
pub struct Columns<R> {
    columns: Vec<Column<R>>,
    index: AHashMap<String, usize>,
}

impl<R> Columns<R> {
    /// Register columns in order.
    ///
    /// Duplicate ids are a programming error: debug builds panic, release
    /// builds keep the first position with the last definition.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        let mut registry = Self {
            columns: Vec::with_capacity(columns.len()),
            index: AHashMap::with_capacity(columns.len()),
        };
        for column in columns {
            registry.insert(column);
        }
        registry
    }

    fn insert(&mut self, column: Column<R>) {
        if let Some(&slot) = self.index.get(&column.id) {
            if cfg!(debug_assertions) {
                panic!("duplicate column id: {}", column.id);
            }
            tracing::warn!(column = %column.id, "Duplicate column id, last definition wins");
            self.columns[slot] = column;
            return;
        }
        self.index.insert(column.id.clone(), self.columns.len());
        self.columns.push(column);
    }

    /// Look up a column by id
    pub fn get(&self, id: &str) -> Option<&Column<R>> {
        self.index.get(id).map(|&slot| &self.columns[slot])
    }

    /// Look up a column that must exist
    pub fn require(&self, id: &str) -> Result<&Column<R>> {
        self.get(id).ok_or_else(|| Error::UnknownColumn { id: id.to_string() })
    }

    /// Iterate columns in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Column<R>> {
        self.columns.iter()
    }

    /// Columns that take part in search
    pub fn searchable(&self) -> impl Iterator<Item = &Column<R>> {
        self.columns.iter().filter(|column| column.has_accessor())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<R> std::fmt::Debug for Columns<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.columns.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn test_field_and_derived_values() {
        let row = json!({ "name": "Design Tokens", "tasks": 26 });
        let name: Column<Value> = Column::new("name", "Project").field("name");
        let double: Column<Value> = Column::new("double", "Double").derive(|row: &Value| {
            match row.field("tasks") {
                CellValue::Number(n) => CellValue::Number(n * 2.0),
                other => other,
            }
        });
        let actions: Column<Value> = Column::new("actions", "Actions");

        assert_eq!(name.value(&row), Some(CellValue::from("Design Tokens")));
        assert_eq!(double.value(&row), Some(CellValue::Number(52.0)));
        assert_eq!(actions.value(&row), None);
        assert_eq!(actions.render_cell(&row), "");
    }

    #[test]
    fn test_sortable_requires_accessor() {
        let plain: Column<Value> = Column::new("actions", "Actions").sortable();
        assert!(!plain.is_sortable());

        let tasks: Column<Value> = Column::new("tasks", "Tasks").field("tasks").sortable();
        assert!(tasks.is_sortable());
    }

    #[test]
    fn test_from_config() {
        let config: ColumnConfig =
            toml::from_str("id = \"tasks\"\nheader = \"Tasks\"\nwidth = 6").expect("column config");
        let column: Column<Value> = Column::from_config(&config);

        assert_eq!(column.header, "Tasks");
        assert!(column.is_sortable());
        assert_eq!(column.width, ColumnWidth::Fixed(6));
        assert_eq!(column.value(&json!({ "tasks": 9 })), Some(CellValue::Number(9.0)));
    }

    #[test]
    fn test_require_unknown_column() {
        let columns: Columns<Value> = Columns::new(vec![Column::new("name", "Project")]);
        assert!(columns.require("name").is_ok());
        assert!(matches!(columns.require("owner"), Err(Error::UnknownColumn { .. })));
    }

    #[test]
    fn test_custom_render_overrides_value() {
        let row = json!({ "status": "Active" });
        let status: Column<Value> = Column::new("status", "Status")
            .field("status")
            .render(|row: &Value| format!("[{}]", row.field("status").to_display_string()));

        assert_eq!(status.render_cell(&row), "[Active]");
        assert_eq!(status.search_text(&row), "Active");
    }

    #[test]
    fn test_columns_lookup() {
        let columns: Columns<Value> = Columns::new(vec![
            Column::new("name", "Project").field("name"),
            Column::new("actions", "Actions"),
        ]);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns.get("name").map(|c| c.header.as_str()), Some("Project"));
        assert!(columns.get("owner").is_none());
        assert_eq!(columns.searchable().count(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "duplicate column id")]
    fn test_duplicate_column_id_panics_in_debug() {
        let _columns: Columns<Value> = Columns::new(vec![
            Column::new("name", "Project"),
            Column::new("name", "Name"),
        ]);
    }
}
