// positivador-core/src/application/assembler.rs

use std::time::Instant;
use tracing::{info, instrument};

use crate::application::aggregator::extract_table;
use crate::application::context::ReportContext;
use crate::application::locator::list_tables;
use crate::application::resolver::resolve_binding;
use crate::domain::filter::AdvisorFilter;
use crate::domain::payload::{Payload, PayloadBuilder};
use crate::error::PositivadorError;

/// Runs the whole pipeline: locate, resolve, extract, merge.
///
/// Tables are processed one after the other on the same store. The first
/// failure aborts the run and nothing is returned.
#[instrument(
    skip(ctx, filter),
    fields(engine = ctx.store.engine_name(), filtered = filter.is_some())
)]
pub async fn build_payload(
    ctx: &ReportContext<'_>,
    limit_tables: Option<usize>,
    filter: Option<&AdvisorFilter>,
) -> Result<Payload, PositivadorError> {
    let start = Instant::now();
    let tables = list_tables(ctx, limit_tables).await?;
    info!(count = tables.len(), "Monthly tables located");

    let mut builder = PayloadBuilder::new();
    for table in &tables {
        let binding = resolve_binding(ctx, table).await?;
        let extract = extract_table(ctx, table, &binding, filter).await?;
        info!(
            table = %table.name,
            month = %table.month,
            advisors = extract.summary.len(),
            rows = extract.details.len(),
            "Table aggregated"
        );
        for row in extract.summary {
            builder.add_summary(row);
        }
        for row in extract.details {
            builder.add_detail(row);
        }
    }

    let payload = builder.build();
    info!(
        advisors = payload.series.len(),
        months = payload.months.len(),
        duration = ?start.elapsed(),
        "Payload assembled"
    );
    Ok(payload)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::testing::{MockStore, MockTable, context_parts, drifted_columns};
    use crate::domain::calendar::MonthKey;
    use crate::domain::error::DomainError;
    use crate::domain::normalize::Flag;
    use crate::infrastructure::adapters::DuckDBStore;
    use anyhow::Result;

    fn month(m: u32) -> MonthKey {
        MonthKey::new(2025, m).unwrap()
    }

    const COLUMNS: &str = "assessor VARCHAR, cliente VARCHAR, \
                           ativou_em_m VARCHAR, evadiu_em_m VARCHAR, net_em_m VARCHAR, \
                           receita_no_mes VARCHAR, captacao_liquida_em_m VARCHAR";

    fn seeded_store(statements: &str) -> Result<DuckDBStore> {
        let store = DuckDBStore::new(":memory:")?;
        store.execute_batch(statements)?;
        Ok(store)
    }

    fn two_months() -> Result<DuckDBStore> {
        seeded_store(&format!(
            "CREATE TABLE relatorio_positivador_janeiro_2025 ({COLUMNS});
             CREATE TABLE relatorio_positivador_fevereiro_2025 ({COLUMNS});
             INSERT INTO relatorio_positivador_janeiro_2025 VALUES
                ('A1', 'c1', 'sim', 'não', '10', '800,00', '1.500,00'),
                ('B22', 'c2', 'não', 'sim', '0', '1.000,50', 'abc');
             INSERT INTO relatorio_positivador_fevereiro_2025 VALUES
                ('A1', 'c1', 'sim', 'não', '5', '800,00', '1.500,00');"
        ))
    }

    #[tokio::test]
    async fn test_two_months_end_to_end() -> Result<()> {
        let store = two_months()?;
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        let payload = build_payload(&ctx, None, None).await?;

        assert_eq!(payload.series, vec!["A1", "B22"]);
        assert_eq!(payload.months, vec![month(1), month(2)]);
        assert_eq!(payload.activations["A1"][&month(1)], 1);
        assert_eq!(payload.activations["A1"][&month(2)], 1);
        assert_eq!(payload.fundraising["A1"][&month(1)], 1500.0);
        assert_eq!(payload.fundraising["A1"][&month(2)], 1500.0);
        assert_eq!(payload.revenue["A1"][&month(1)], 800.0);

        // B22 only appears in January; February is densified to zero.
        assert_eq!(payload.activations["B22"][&month(2)], 0);
        assert_eq!(payload.fundraising["B22"][&month(1)], 0.0);
        assert_eq!(payload.revenue["B22"][&month(1)], 1000.5);

        // Zero activations across the year fall back to [2, 10].
        let target = payload.targets.activations["B22"];
        assert!((2..=10).contains(&target));

        assert_eq!(payload.summary.len(), 3);
        assert_eq!(payload.details.len(), 3);
        let b22 = payload.details.iter().find(|d| d.advisor == "B22").unwrap();
        assert_eq!(b22.churned, Flag::Yes);
        assert_eq!(b22.fundraising, 0.0);
        assert_eq!(b22.month_label, "Jan");
        Ok(())
    }

    #[tokio::test]
    async fn test_payload_is_reproducible() -> Result<()> {
        let store = two_months()?;
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        let first = build_payload(&ctx, None, None).await?;
        let second = build_payload(&ctx, None, None).await?;
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first)?,
            serde_json::to_string(&second)?
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_filter_is_consistent_across_outputs() -> Result<()> {
        let store = two_months()?;
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);
        let filter = AdvisorFilter::parse("B22, Z9").unwrap();

        let payload = build_payload(&ctx, None, Some(&filter)).await?;

        assert_eq!(payload.series, vec!["B22"]);
        assert_eq!(payload.activations.keys().collect::<Vec<_>>(), vec!["B22"]);
        assert_eq!(payload.targets.revenue.keys().collect::<Vec<_>>(), vec!["B22"]);
        assert!(payload.summary.iter().all(|r| r.advisor == "B22"));
        assert!(payload.details.iter().all(|r| r.advisor == "B22"));
        // Months only come from filtered rows.
        assert_eq!(payload.months, vec![month(1)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_limit_tables_keeps_first_names() -> Result<()> {
        let store = two_months()?;
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        // "fevereiro" sorts before "janeiro".
        let payload = build_payload(&ctx, Some(1), None).await?;
        assert_eq!(payload.months, vec![month(2)]);
        assert_eq!(payload.series, vec!["A1"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_no_tables_gives_empty_payload() -> Result<()> {
        let store = DuckDBStore::new(":memory:")?;
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        let payload = build_payload(&ctx, None, None).await?;
        assert_eq!(payload, Payload::default());
        assert_eq!(
            serde_json::to_value(&payload)?,
            serde_json::json!({
                "series": [], "meses": [], "ativacoes": {}, "captacao": {}, "receita": {},
                "metas": { "ativacoes": {}, "captacao": {}, "receita": {} },
                "tabela": [], "detalhes": []
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_column_aborts_the_run() -> Result<()> {
        let store = seeded_store(&format!(
            "CREATE TABLE relatorio_positivador_janeiro_2025 ({COLUMNS});
             CREATE TABLE relatorio_positivador_marco_2025 (assessor VARCHAR, cliente VARCHAR);
             INSERT INTO relatorio_positivador_janeiro_2025 VALUES
                ('A1', 'c1', 'sim', 'não', '0', '0', '0');"
        ))?;
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        let result = build_payload(&ctx, None, None).await;
        assert!(matches!(
            result,
            Err(PositivadorError::Domain(DomainError::ColumnNotFound { ref table, .. }))
                if table == "relatorio_positivador_marco_2025"
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_unreachable_store_aborts_the_run() -> Result<()> {
        let store = MockStore::unreachable();
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        assert!(build_payload(&ctx, None, None).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_drifted_columns_are_aggregated() -> Result<()> {
        let store = seeded_store(
            "CREATE TABLE relatorio_positivador_março_2025 (
                assessor VARCHAR, cliente VARCHAR,
                \"Ativou em M?\" VARCHAR, \"Evadiu em M?\" VARCHAR, \"Net em M\" DOUBLE,
                \"Receita no Mês\" VARCHAR, \"Captação Líquida em M\" VARCHAR);
             INSERT INTO relatorio_positivador_março_2025 VALUES
                ('A1', 'c1', 'Sim', 'Não', 12.5, '100', '2.000,00'),
                ('A1', 'c2', 'SIM ', NULL, NULL, NULL, '500'),
                (NULL, 'c3', 'y', 'n', 1, '1', '1');",
        )?;
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        let payload = build_payload(&ctx, None, None).await?;
        assert_eq!(payload.months, vec![month(3)]);
        assert_eq!(payload.series, vec!["", "A1"]);
        assert_eq!(payload.activations["A1"][&month(3)], 2);
        assert_eq!(payload.fundraising["A1"][&month(3)], 2500.0);
        assert_eq!(payload.revenue["A1"][&month(3)], 100.0);
        assert_eq!(payload.activations[""][&month(3)], 1);

        let c1 = payload.details.iter().find(|d| d.client == "c1").unwrap();
        assert_eq!(c1.net_flow, 12.5);
        Ok(())
    }

    #[tokio::test]
    async fn test_store_sums_agree_with_detail_coercion() -> Result<()> {
        let store = seeded_store(&format!(
            "CREATE TABLE relatorio_positivador_abril_2025 ({COLUMNS});
             INSERT INTO relatorio_positivador_abril_2025 VALUES
                ('A1', 'c1', 'Sim', '', '0', '1.234,50', '1.234.567,89'),
                ('A1', 'c2', ' sim ', '', '0', '12,5', '  42 '),
                ('A1', 'c3', '1', '', '0', 'abc', ''),
                ('A1', 'c4', 'TRUE', '', '0', NULL, NULL),
                ('A1', 'c5', 't', '', '0', '1e3', 'inf'),
                ('A1', 'c6', 'Y', '', '0', '-7,25', '1.500'),
                ('A1', 'c7', 'yes', '', '0', '0', '3.5'),
                ('A1', 'c8', 's', '', '0', '', 'NaN'),
                ('A1', 'c9', 'não', '', '0', '1,2,3', '10'),
                ('A1', 'c10', '0', '', '0', '5', '5'),
                ('A1', 'c11', NULL, '', '0', '5', '5'),
                ('A1', 'c12', 'false', '', '0', '5', '5'),
                ('A1', 'c13', '1' || chr(9), '', '0', chr(160) || '2,5', '3' || chr(10)),
                ('A1', 'c14', 'yes' || chr(10), '', '0', chr(13) || '1.000,00' || chr(11), '0'),
                ('A1', 'c15', chr(8195) || 'sim' || chr(133), '', '0', '0', chr(12) || '7');"
        ))?;
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        let payload = build_payload(&ctx, None, None).await?;
        let summary = &payload.summary[0];

        let activations = payload.details.iter().filter(|d| d.activated.is_yes()).count() as i64;
        let fundraising: f64 = payload.details.iter().map(|d| d.fundraising).sum();
        let revenue: f64 = payload.details.iter().map(|d| d.revenue).sum();

        assert_eq!(summary.activations, 11);
        assert_eq!(summary.activations, activations);
        assert!((summary.fundraising - fundraising).abs() < 1e-6);
        assert!((summary.revenue - revenue).abs() < 1e-6);
        Ok(())
    }

    #[tokio::test]
    async fn test_mock_store_pipeline() -> Result<()> {
        let store = MockStore::new(vec![
            MockTable::named("relatorio_positivador_maio_2025")
                .with_columns(&drifted_columns())
                .with_summary("A1", 0, 0.0, 0.0),
        ]);
        let (renderer, config) = context_parts(2025)?;
        let ctx = ReportContext::new(&store, &renderer, &config);

        let payload = build_payload(&ctx, None, None).await?;
        assert_eq!(payload.series, vec!["A1"]);
        assert!(payload.targets.fundraising["A1"] >= 30000.0);
        assert!(payload.targets.revenue["A1"] >= 20000.0);
        assert_eq!(payload.targets.fundraising["A1"] % 1000.0, 0.0);
        Ok(())
    }
}
