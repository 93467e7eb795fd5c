// positivador-core/src/application/locator.rs

use tracing::{debug, instrument};

use crate::application::context::ReportContext;
use crate::domain::calendar::{SourceTable, TablePattern};
use crate::error::PositivadorError;

/// Monthly tables of the reporting year, ordered by name, at most `limit`.
/// Names outside the convention are skipped; an empty result is not an error.
#[instrument(skip(ctx), fields(engine = ctx.store.engine_name(), year = ctx.config.year))]
pub async fn list_tables(
    ctx: &ReportContext<'_>,
    limit: Option<usize>,
) -> Result<Vec<SourceTable>, PositivadorError> {
    let pattern = TablePattern::new(&ctx.config.table_prefix, ctx.config.year)?;

    let candidates = ctx
        .store
        .list_tables(&ctx.config.schema, &ctx.config.table_prefix)
        .await?;

    let mut tables: Vec<SourceTable> = candidates
        .iter()
        .filter_map(|name| {
            let table = pattern.classify(name);
            if table.is_none() {
                debug!(table = %name, "Skipping table outside the naming convention");
            }
            table
        })
        .collect();
    tables.sort_by(|a, b| a.name.cmp(&b.name));

    if let Some(limit) = limit {
        tables.truncate(limit);
    }
    Ok(tables)
}
