// positivador-core/src/application/resolver.rs

use tracing::{debug, instrument, warn};

use crate::application::context::ReportContext;
use crate::domain::calendar::SourceTable;
use crate::domain::columns::ColumnBinding;
use crate::error::PositivadorError;

/// One schema introspection, then the six drifting fields are resolved.
/// A missing field aborts the run.
#[instrument(skip(ctx, table), fields(table = %table.name))]
pub async fn resolve_binding(
    ctx: &ReportContext<'_>,
    table: &SourceTable,
) -> Result<ColumnBinding, PositivadorError> {
    let schema = ctx
        .store
        .fetch_columns(&ctx.config.schema, &table.name)
        .await?;
    debug!(
        columns = ?schema.iter().map(|c| c.describe()).collect::<Vec<_>>(),
        "Table schema"
    );
    let columns: Vec<String> = schema.into_iter().map(|c| c.name).collect();

    let (binding, fallbacks) =
        ColumnBinding::resolve(&table.name, &columns, &ctx.config.advisor_column)?;

    for (field, column) in fallbacks {
        warn!(%field, column = %column, "Column resolved by substring fallback");
    }
    Ok(binding)
}
