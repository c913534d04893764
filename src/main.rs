//! Tabview - Command Line Entry Point
//!
//! Loads a JSON array of rows, applies table interactions given on the
//! command line and prints the resulting table as text.

use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use serde_json::Value;
use tabview::components::composite::data_table::{Column, DataTable, VecDataProvider};
use tabview::domain::config::TableConfig;
use tabview::error::Error;
use tabview::helpers::default_config_path;
use tabview::utils::config_store::{load_config, load_rows};

/// Interactions are applied in the order they appear on the command line.
#[derive(Debug, Parser)]
#[command(name = "tabview")]
#[command(about = "Search, filter, sort, page and select rows of a JSON table", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON array of row objects
    #[arg(value_name = "ROWS")]
    rows: PathBuf,

    /// Table config (TOML or JSON); defaults to the per-user table.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Free-text search across all columns
    #[arg(long, value_name = "TEXT")]
    query: Vec<String>,

    /// Filter one column; enables column filters
    #[arg(long, value_name = "COL=TEXT", value_parser = parse_filter)]
    filter: Vec<(String, String)>,

    /// Click a column header (repeat to flip direction)
    #[arg(long, value_name = "COL")]
    sort: Vec<String>,

    /// Go to a page (1-based)
    #[arg(long, value_name = "N")]
    page: Vec<usize>,

    /// Rows per page
    #[arg(long, value_name = "N")]
    page_size: Vec<usize>,

    /// Toggle the row with this id; enables row selection
    #[arg(long, value_name = "ID")]
    select: Vec<String>,

    /// Toggle every row on the current page; enables row selection
    #[arg(long, action = clap::ArgAction::Count)]
    select_page: u8,
}

/// One interaction taken from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Query(String),
    Filter(String, String),
    Sort(String),
    Page(usize),
    PageSize(usize),
    Select(String),
    SelectPage,
}

fn parse_filter(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(column, text)| (column.to_string(), text.to_string()))
        .ok_or_else(|| format!("expected COL=TEXT, got {raw:?}"))
}

/// Merge the repeated options back into command line order
fn ordered_actions(cli: &Cli, matches: &ArgMatches) -> Vec<Action> {
    let indices = |id: &str| -> Vec<usize> {
        matches
            .indices_of(id)
            .map(Iterator::collect)
            .unwrap_or_default()
    };

    let mut actions: Vec<(usize, Action)> = Vec::new();
    actions.extend(indices("query").into_iter().zip(cli.query.iter().cloned().map(Action::Query)));
    actions.extend(
        indices("filter")
            .into_iter()
            .zip(cli.filter.iter().cloned().map(|(column, text)| Action::Filter(column, text))),
    );
    actions.extend(indices("sort").into_iter().zip(cli.sort.iter().cloned().map(Action::Sort)));
    actions.extend(indices("page").into_iter().zip(cli.page.iter().copied().map(Action::Page)));
    actions.extend(
        indices("page_size")
            .into_iter()
            .zip(cli.page_size.iter().copied().map(Action::PageSize)),
    );
    actions.extend(indices("select").into_iter().zip(cli.select.iter().cloned().map(Action::Select)));
    // counted flags keep only their last position
    if let Some(&index) = indices("select_page").last() {
        actions.extend((0..cli.select_page).map(|_| (index, Action::SelectPage)));
    }

    actions.sort_by_key(|(index, _)| *index);
    actions.into_iter().map(|(_, action)| action).collect()
}

fn parse_cli<I, T>(args: I) -> Result<(Cli, Vec<Action>), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = Cli::command().try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    let actions = ordered_actions(&cli, &matches);
    Ok((cli, actions))
}

/// Columns from the config, or one per key of the first row
fn build_columns(config: &TableConfig, rows: &[Value]) -> Vec<Column<Value>> {
    if !config.columns.is_empty() {
        return config.columns.iter().map(Column::from_config).collect();
    }
    rows.first()
        .and_then(Value::as_object)
        .map(|object| {
            object
                .keys()
                .map(|key| Column::new(key.clone(), key.clone()).field(key.clone()).sortable())
                .collect()
        })
        .unwrap_or_default()
}

/// Build the table and apply `actions` in order.
///
/// Flags that need a feature switch it on, so no interaction is dropped.
fn build_table(
    mut config: TableConfig,
    rows: Vec<Value>,
    actions: &[Action],
) -> anyhow::Result<DataTable<VecDataProvider<Value>>> {
    if actions.iter().any(|a| matches!(a, Action::Filter(..))) {
        config.column_filters_enabled = true;
    }
    if actions
        .iter()
        .any(|a| matches!(a, Action::Select(_) | Action::SelectPage))
    {
        config.enable_row_selection = true;
    }

    let columns = build_columns(&config, &rows);
    let mut table = DataTable::new(columns, VecDataProvider::new(rows), config)?;

    for action in actions {
        tracing::debug!(?action, "Applying action");
        match action {
            Action::Query(query) => {
                table.set_query(query.as_str());
            }
            Action::Filter(column, text) => {
                if !table.columns().require(column)?.has_accessor() {
                    return Err(Error::Invalid {
                        message: format!("column {column:?} has no value to filter on"),
                    }
                    .into());
                }
                table.set_column_filter(column.as_str(), text.as_str());
            }
            Action::Sort(column) => {
                if !table.columns().require(column)?.is_sortable() {
                    return Err(Error::Invalid {
                        message: format!("column {column:?} is not sortable"),
                    }
                    .into());
                }
                table.toggle_sort(column.as_str());
            }
            Action::Page(page) => {
                table.set_page(*page);
            }
            Action::PageSize(size) => {
                table.set_page_size(*size);
            }
            Action::Select(id) => {
                table.toggle_row(id.as_str());
            }
            Action::SelectPage => {
                table.toggle_visible_rows();
            }
        }
    }

    Ok(table)
}

fn run(cli: Cli, actions: &[Action]) -> anyhow::Result<String> {
    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config: TableConfig = load_config(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    let rows: Vec<Value> =
        load_rows(&cli.rows).with_context(|| format!("loading rows {}", cli.rows.display()))?;

    let table = build_table(config, rows, actions)?;
    Ok(table.render().to_text())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let (cli, actions) = parse_cli(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let text = run(cli, &actions)?;
    println!("{text}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows() -> Vec<Value> {
        vec![
            json!({ "name": "Q3 Analytics", "owner": "Dev", "tasks": 9 }),
            json!({ "name": "Billing V2", "owner": "Sara", "tasks": 14 }),
        ]
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_actions_keep_command_line_order() {
        let (cli, actions) = parse_cli([
            "tabview",
            "rows.json",
            "--sort",
            "owner",
            "--query",
            "a",
            "--select-page",
            "--filter",
            "owner=dev",
            "--sort",
            "owner",
            "--page-size",
            "5",
        ])
        .expect("valid arguments");

        assert_eq!(cli.rows, PathBuf::from("rows.json"));
        assert_eq!(
            actions,
            vec![
                Action::Sort("owner".into()),
                Action::Query("a".into()),
                Action::SelectPage,
                Action::Filter("owner".into(), "dev".into()),
                Action::Sort("owner".into()),
                Action::PageSize(5),
            ]
        );
    }

    #[test]
    fn test_bad_arguments_are_rejected() {
        assert!(parse_cli(["tabview", "rows.json", "--filter", "owner"]).is_err());
        assert!(parse_cli(["tabview", "rows.json", "--page", "two"]).is_err());
        assert!(parse_cli(["tabview"]).is_err());
    }

    #[test]
    fn test_columns_from_first_row_keys() {
        let columns = build_columns(&TableConfig::default(), &rows());
        let ids: Vec<_> = columns.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["name", "owner", "tasks"]);
        assert!(columns.iter().all(Column::is_sortable));

        assert!(build_columns(&TableConfig::default(), &[]).is_empty());
    }

    #[test]
    fn test_columns_from_config() {
        let config: TableConfig = toml::from_str(
            r#"
            [[columns]]
            id = "project"
            header = "Project"
            field = "name"

            [[columns]]
            id = "tasks"
            sortable = false
            "#,
        )
        .expect("parse config");

        let columns = build_columns(&config, &rows());
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].header, "Project");
        assert_eq!(columns[0].render_cell(&rows()[1]), "Billing V2");
        assert!(!columns[1].is_sortable());
    }

    #[test]
    fn test_filter_and_select_flags_enable_features() {
        let actions = [
            Action::Filter("owner".into(), "dev".into()),
            Action::Select("0".into()),
        ];
        let table = build_table(TableConfig::default(), rows(), &actions).expect("table");

        assert!(table.config().column_filters_enabled);
        assert!(table.config().enable_row_selection);
        assert_eq!(table.filtered_count(), 1);
        assert_eq!(table.selected_ids(), vec!["0".to_string()]);
        assert!(table.render().to_text().contains("• 1 selected"));
    }

    #[test]
    fn test_sort_rejects_unknown_and_unsortable_columns() {
        let result = build_table(TableConfig::default(), rows(), &[Action::Sort("missing".into())]);
        let err = result.expect_err("unknown column");
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::UnknownColumn { .. })
        ));

        let config: TableConfig = toml::from_str(
            r#"
            [[columns]]
            id = "tasks"
            sortable = false
            "#,
        )
        .expect("parse config");
        let result = build_table(config, rows(), &[Action::Sort("tasks".into())]);
        let err = result.expect_err("unsortable column");
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Invalid { .. })));
    }

    #[test]
    fn test_actions_apply_in_order() {
        let actions = [
            Action::Sort("tasks".into()),
            Action::Sort("tasks".into()),
            Action::PageSize(1),
            Action::Page(2),
        ];
        let table = build_table(TableConfig::default(), rows(), &actions).expect("table");

        let names: Vec<_> = table
            .visible_rows()
            .filter_map(|row| row["name"].as_str())
            .collect();
        assert_eq!(names, vec!["Q3 Analytics"]);
        assert_eq!(table.effective_page(), 2);
    }
}
