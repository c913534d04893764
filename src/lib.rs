//! Tabview
//!
//! A headless tabular view controller: declare columns over in-memory rows,
//! then drive search, column filters, sorting, pagination and row selection
//! through events and read back a render model.

pub mod components;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod helpers;
pub mod state;
pub mod utils;

pub use components::composite::data_table::{Column, DataTable, TableRender, VecDataProvider};
pub use domain::config::TableConfig;
pub use error::{Error, Result};
