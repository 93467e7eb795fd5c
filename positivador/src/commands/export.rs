// positivador/src/commands/export.rs
//
// USE CASE: Export the filtered detail rows as CSV.

use anyhow::Context;
use std::path::Path;

use positivador_core::application::{build_payload, render_detail_csv};
use positivador_core::domain::filter::AdvisorFilter;
use positivador_core::infrastructure::fs::atomic_write;

use super::Session;

pub async fn execute(
    config: Option<&Path>,
    db_path: Option<String>,
    limit: Option<usize>,
    advisors: Option<String>,
    output: String,
) -> anyhow::Result<()> {
    let session = Session::open(config, db_path)?;
    let filter = advisors.as_deref().and_then(AdvisorFilter::parse);

    let payload = build_payload(&session.context(), limit, filter.as_ref()).await?;
    let csv = render_detail_csv(&payload)?;

    if output == "-" {
        print!("{csv}");
        return Ok(());
    }

    atomic_write(&output, &csv).with_context(|| format!("Failed to write CSV to {output}"))?;
    eprintln!(
        "✨ {} detail rows exported to {}",
        payload.details.len(),
        output
    );
    Ok(())
}
