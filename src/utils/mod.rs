//! Utilities - Formatting and Config Loading

pub mod config_store;
pub mod format;
