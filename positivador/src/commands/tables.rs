// positivador/src/commands/tables.rs
//
// USE CASE: List the monthly tables of the reporting year.

use comfy_table::Table;
use serde_json::json;
use std::path::Path;

use positivador_core::application::list_tables;

use super::Session;

pub async fn execute(
    config: Option<&Path>,
    db_path: Option<String>,
    limit: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    let session = Session::open(config, db_path)?;
    let tables = list_tables(&session.context(), limit).await?;

    if json {
        let rows: Vec<_> = tables
            .iter()
            .map(|t| json!({ "table": t.name, "mes": t.month }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if tables.is_empty() {
        println!(
            "No table matching '{}<mes>_{}' in schema '{}'.",
            session.config.table_prefix, session.config.year, session.config.schema
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["table", "mes"]);
    for t in &tables {
        table.add_row(vec![t.name.clone(), t.month.to_string()]);
    }
    println!("{table}");
    Ok(())
}
