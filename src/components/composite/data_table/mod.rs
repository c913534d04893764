//! DataTable Component
//!
//! A headless data table: columns, search, column filters, sorting,
//! pagination and row selection over an in-memory row collection.

pub mod column;
pub mod data_provider;
pub mod data_table;
pub mod filter;
pub mod pagination;
pub mod render;
pub mod selection;
pub mod sort;
pub mod value;

pub use column::{Accessor, Column, ColumnWidth, Columns, RowId};
pub use data_provider::{DataProvider, VecDataProvider};
pub use data_table::{DataTable, RowIdFn, TableView};
pub use pagination::Pagination;
pub use render::{FilterInput, HeaderCell, RenderedRow, SelectAllCell, TableBody, TableRender};
pub use selection::{SelectAllState, Selection};
pub use sort::SortDirection;
pub use value::{CellValue, Record, SortKey};
