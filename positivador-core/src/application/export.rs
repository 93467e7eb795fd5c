// positivador-core/src/application/export.rs

use tracing::instrument;

use crate::domain::payload::{DetailRow, Payload};
use crate::error::PositivadorError;
use crate::infrastructure::error::InfrastructureError;

pub const DEFAULT_EXPORT_FILE: &str = "detalhes_filtrado.csv";

pub const DETAIL_HEADER: [&str; 9] = [
    "assessor",
    "cliente",
    "ativou_em_m",
    "evadiu_em_m",
    "net_em_m",
    "receita_no_mes",
    "captacao_liquida_em_m",
    "mes",
    "mes_nome",
];

/// Detail rows as comma-separated text, amounts with two decimals.
#[instrument(skip(payload), fields(rows = payload.details.len()))]
pub fn render_detail_csv(payload: &Payload) -> Result<String, PositivadorError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(DETAIL_HEADER)
        .map_err(InfrastructureError::from)?;
    for row in &payload.details {
        writer
            .write_record(detail_record(row))
            .map_err(InfrastructureError::from)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PositivadorError::InternalError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| PositivadorError::InternalError(e.to_string()))
}

fn detail_record(row: &DetailRow) -> [String; 9] {
    [
        row.advisor.clone(),
        row.client.clone(),
        row.activated.to_string(),
        row.churned.to_string(),
        format!("{:.2}", row.net_flow),
        format!("{:.2}", row.revenue),
        format!("{:.2}", row.fundraising),
        row.month.to_string(),
        row.month_label.to_string(),
    ]
}
