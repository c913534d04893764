//! Domain - Configuration Types
//!
//! Plain serde data structures; no table logic lives here.

pub mod config;

pub use config::{ColumnConfig, TableConfig};
