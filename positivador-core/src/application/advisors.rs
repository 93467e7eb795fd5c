// positivador-core/src/application/advisors.rs

use serde_json::json;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

use crate::application::context::ReportContext;
use crate::application::locator::list_tables;
use crate::application::ports::templates;
use crate::domain::payload::sort_advisor_ids;
use crate::error::PositivadorError;

/// Distinct advisor ids over every monthly table of the year, shorter ids
/// first, then lexicographic. Null ids are listed as `""`.
#[instrument(skip(ctx), fields(engine = ctx.store.engine_name()))]
pub async fn list_advisors(ctx: &ReportContext<'_>) -> Result<Vec<String>, PositivadorError> {
    let mut seen = BTreeSet::new();

    for table in list_tables(ctx, None).await? {
        let sql = ctx.renderer.render(
            templates::ADVISORS,
            &json!({
                "schema": ctx.config.schema,
                "table": table.name,
                "advisor": ctx.config.advisor_column,
            }),
        )?;
        let ids = ctx.store.query_strings(&sql).await?;
        debug!(table = %table.name, count = ids.len(), "Advisors read");
        seen.extend(ids.into_iter().map(Option::unwrap_or_default));
    }

    let mut advisors: Vec<String> = seen.into_iter().collect();
    sort_advisor_ids(&mut advisors);
    Ok(advisors)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::testing::{MockStore, MockTable, context_parts};
    use crate::infrastructure::adapters::DuckDBStore;
    use anyhow::Result;

    #[tokio::test]
    async fn test_advisors_sorted_by_length_then_text() -> Result<()> {
        let store = MockStore::new(vec![
            MockTable::named("relatorio_positivador_janeiro_2025")
                .with_summary("A10", 0, 0.0, 0.0)
                .with_summary("B2", 0, 0.0, 0.0),
            MockTable::named("relatorio_positivador_fevereiro_2025")
                .with_summary("A2", 0, 0.0, 0.0)
                .with_summary("B2", 0, 0.0, 0.0)
                .with_summary("A100", 0, 0.0, 0.0),
        ]);
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        let advisors = list_advisors(&ctx).await?;
        assert_eq!(advisors, vec!["A2", "B2", "A10", "A100"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_advisors_from_duckdb_with_nulls() -> Result<()> {
        let store = DuckDBStore::new(":memory:")?;
        store.execute_batch(
            "CREATE TABLE relatorio_positivador_julho_2025 (assessor VARCHAR);
             CREATE TABLE relatorio_positivador_agosto_2025 (assessor INTEGER);
             CREATE TABLE relatorio_positivador_julho_2024 (assessor VARCHAR);
             INSERT INTO relatorio_positivador_julho_2025 VALUES ('9'), ('12'), (NULL), ('12');
             INSERT INTO relatorio_positivador_agosto_2025 VALUES (3), (12);
             INSERT INTO relatorio_positivador_julho_2024 VALUES ('OLD');",
        )?;
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        let advisors = list_advisors(&ctx).await?;
        assert_eq!(advisors, vec!["", "3", "9", "12"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_no_tables_no_advisors() -> Result<()> {
        let store = MockStore::new(vec![]);
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        assert!(list_advisors(&ctx).await?.is_empty());
        Ok(())
    }
}
