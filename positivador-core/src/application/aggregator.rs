// positivador-core/src/application/aggregator.rs

use serde_json::json;
use tracing::{debug, instrument};

use crate::application::context::ReportContext;
use crate::application::ports::templates;
use crate::domain::calendar::{MonthKey, SourceTable};
use crate::domain::columns::ColumnBinding;
use crate::domain::filter::{AdvisorFilter, admits};
use crate::domain::normalize::{Flag, parse_amount};
use crate::domain::payload::{DetailRow, SummaryRow};
use crate::error::PositivadorError;
use crate::ports::store::RawDetailRecord;

/// Both extractions of one monthly table.
#[derive(Debug, Default)]
pub struct TableExtract {
    pub summary: Vec<SummaryRow>,
    pub details: Vec<DetailRow>,
}

#[instrument(skip_all, fields(table = %table.name))]
pub async fn extract_table(
    ctx: &ReportContext<'_>,
    table: &SourceTable,
    binding: &ColumnBinding,
    filter: Option<&AdvisorFilter>,
) -> Result<TableExtract, PositivadorError> {
    let summary = extract_summary(ctx, table, binding, filter).await?;
    let details = extract_details(ctx, table, binding, filter).await?;
    debug!(
        advisors = summary.len(),
        rows = details.len(),
        "Table extracted"
    );
    Ok(TableExtract { summary, details })
}

/// Per-advisor sums, grouped and coerced by the store engine.
pub async fn extract_summary(
    ctx: &ReportContext<'_>,
    table: &SourceTable,
    binding: &ColumnBinding,
    filter: Option<&AdvisorFilter>,
) -> Result<Vec<SummaryRow>, PositivadorError> {
    let sql = ctx
        .renderer
        .render(templates::SUMMARY, &query_context(ctx, table, binding))?;

    let rows = ctx
        .store
        .query_summary(&sql)
        .await?
        .into_iter()
        .filter(|record| admits(filter, &record.advisor))
        .map(|record| SummaryRow {
            advisor: record.advisor,
            month: table.month,
            activations: record.activations,
            fundraising: record.fundraising,
            revenue: record.revenue,
        })
        .collect();
    Ok(rows)
}

/// Every client row, coerced in-process.
pub async fn extract_details(
    ctx: &ReportContext<'_>,
    table: &SourceTable,
    binding: &ColumnBinding,
    filter: Option<&AdvisorFilter>,
) -> Result<Vec<DetailRow>, PositivadorError> {
    let sql = ctx
        .renderer
        .render(templates::DETAILS, &query_context(ctx, table, binding))?;

    let rows = ctx
        .store
        .query_details(&sql)
        .await?
        .into_iter()
        .map(|record| detail_from_record(record, table.month))
        .filter(|row| admits(filter, &row.advisor))
        .collect();
    Ok(rows)
}

pub fn detail_from_record(record: RawDetailRecord, month: MonthKey) -> DetailRow {
    DetailRow {
        advisor: record.advisor.unwrap_or_default(),
        client: record.client.unwrap_or_default(),
        activated: Flag::from_cell(record.activation.as_deref()),
        churned: Flag::from_cell(record.churn.as_deref()),
        net_flow: parse_amount(record.net_flow.as_deref()),
        revenue: parse_amount(record.revenue.as_deref()),
        fundraising: parse_amount(record.fundraising.as_deref()),
        month,
        month_label: month.label(),
    }
}

fn query_context(
    ctx: &ReportContext<'_>,
    table: &SourceTable,
    binding: &ColumnBinding,
) -> serde_json::Value {
    json!({
        "schema": ctx.config.schema,
        "table": table.name,
        "binding": binding,
    })
}
