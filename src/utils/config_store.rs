//! ConfigStore - Configuration File Loading

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::error::{Error, Result};

/// Load a TOML or JSON config file, chosen by extension.
///
/// A missing or blank file yields `T::default()`.
pub fn load_config<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        info!(path = ?path, "Config file not found, using defaults");
        return Ok(T::default());
    }

    info!(path = ?path, "Loading config file");
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    match extension {
        "toml" => toml::from_str(&content).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            Error::from(e)
        }),
        "json" => serde_json::from_str(&content).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            Error::from(e)
        }),
        other => Err(Error::Invalid {
            message: format!("Unsupported config format: {other:?}"),
        }),
    }
}

/// Load a JSON array of rows
pub fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    info!(path = ?path, "Loading rows");
    let content = fs::read_to_string(path)?;
    let rows: Vec<T> = serde_json::from_str(&content)?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::TableConfig;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tabview-test-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("create temp dir");
        let path = dir.join(name);
        fs::write(&path, content).expect("write temp file");
        path
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("tabview-definitely-missing.toml");
        let config: TableConfig = load_config(&path).expect("defaults");
        assert_eq!(config, TableConfig::default());
    }

    #[test]
    fn test_load_toml_and_json() {
        let toml_path = temp_file("table.toml", "default_page_size = 20\n");
        let config: TableConfig = load_config(&toml_path).expect("toml config");
        assert_eq!(config.default_page_size, 20);

        let json_path = temp_file("table.json", r#"{ "column_filters_enabled": true }"#);
        let config: TableConfig = load_config(&json_path).expect("json config");
        assert!(config.column_filters_enabled);
    }

    #[test]
    fn test_bad_input() {
        let path = temp_file("broken.toml", "default_page_size = [");
        let result: Result<TableConfig> = load_config(&path);
        assert!(matches!(result, Err(Error::TomlDe { .. })));

        let path = temp_file("table.yaml", "a: 1");
        let result: Result<TableConfig> = load_config(&path);
        assert!(matches!(result, Err(Error::Invalid { .. })));
    }

    #[test]
    fn test_load_rows() {
        let path = temp_file("rows.json", r#"[{ "name": "Billing V2" }, { "name": "Q3 Analytics" }]"#);
        let rows: Vec<serde_json::Value> = load_rows(&path).expect("rows");
        assert_eq!(rows.len(), 2);
    }
}
