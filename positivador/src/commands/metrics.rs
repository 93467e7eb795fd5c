// positivador/src/commands/metrics.rs
//
// USE CASE: Build the dashboard payload as JSON.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

use positivador_core::application::build_payload;
use positivador_core::domain::filter::AdvisorFilter;
use positivador_core::infrastructure::fs::atomic_write;

use super::Session;

pub async fn execute(
    config: Option<&Path>,
    db_path: Option<String>,
    limit: Option<usize>,
    advisors: Option<String>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let session = Session::open(config, db_path)?;
    let filter = advisors.as_deref().and_then(AdvisorFilter::parse);

    let payload = build_payload(&session.context(), limit, filter.as_ref()).await?;
    let body = serde_json::to_string_pretty(&payload)?;

    match output {
        Some(path) => {
            atomic_write(&path, &body)
                .with_context(|| format!("Failed to write payload to {}", path.display()))?;
            info!(path = %path.display(), advisors = payload.series.len(), "Payload written");
            eprintln!("✨ Payload written to {}", path.display());
        }
        None => println!("{body}"),
    }
    Ok(())
}
