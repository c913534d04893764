//! Config - Table Configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Construction options for a DataTable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Search input placeholder
    pub search_placeholder: String,
    /// Placeholder row text when no rows match
    pub empty_message: String,
    /// Choices offered for rows per page
    pub page_size_options: Vec<usize>,
    /// Initial rows per page
    pub default_page_size: usize,
    /// Show row checkboxes
    pub enable_row_selection: bool,
    /// Show per-column filter inputs
    pub column_filters_enabled: bool,
    /// Quiet period for query edits; 0 applies each edit immediately
    pub search_debounce_ms: u64,
    /// Column layout, used when columns are built from configuration
    pub columns: Vec<ColumnConfig>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            search_placeholder: "Search rows...".to_string(),
            empty_message: "No matching records found.".to_string(),
            page_size_options: vec![5, 10, 20],
            default_page_size: 10,
            enable_row_selection: false,
            column_filters_enabled: false,
            search_debounce_ms: 0,
            columns: Vec::new(),
        }
    }
}

impl TableConfig {
    /// Check the page size settings
    pub fn validate(&self) -> Result<()> {
        if self.default_page_size == 0 {
            return Err(Error::Invalid {
                message: "default_page_size must be positive".to_string(),
            });
        }
        if self.page_size_options.is_empty() {
            return Err(Error::Invalid {
                message: "page_size_options must not be empty".to_string(),
            });
        }
        if self.page_size_options.contains(&0) {
            return Err(Error::Invalid {
                message: "page_size_options must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Column layout entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Column identifier
    pub id: String,
    /// Header label; defaults to the id
    #[serde(default)]
    pub header: Option<String>,
    /// Field to read; defaults to the id
    #[serde(default)]
    pub field: Option<String>,
    /// Whether the header sorts
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Fixed width in characters for text output
    #[serde(default)]
    pub width: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl ColumnConfig {
    pub fn header(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.id)
    }

    pub fn field(&self) -> &str {
        self.field.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = TableConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size_options, vec![5, 10, 20]);
        assert_eq!(config.search_placeholder, "Search rows...");
    }

    #[test]
    fn test_validate_rejects_bad_page_sizes() {
        let config = TableConfig {
            default_page_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Invalid { .. })));

        let config = TableConfig {
            page_size_options: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = TableConfig {
            page_size_options: vec![5, 0],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_toml() {
        let config: TableConfig = toml::from_str(
            r#"
            default_page_size = 5
            enable_row_selection = true

            [[columns]]
            id = "name"
            header = "Project"

            [[columns]]
            id = "tasks"
            sortable = false
            width = 6
            "#,
        )
        .expect("parse config");

        assert_eq!(config.default_page_size, 5);
        assert!(config.enable_row_selection);
        assert_eq!(config.empty_message, "No matching records found.");
        assert_eq!(config.columns[0].header(), "Project");
        assert_eq!(config.columns[0].field(), "name");
        assert!(config.columns[0].sortable);
        assert_eq!(config.columns[1].header(), "tasks");
        assert!(!config.columns[1].sortable);
        assert_eq!(config.columns[1].width, Some(6));
    }
}
