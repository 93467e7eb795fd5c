// positivador/src/commands/health.rs
//
// USE CASE: Probe the database.

use std::path::Path;

use positivador_core::application::check_health;

use super::Session;

pub async fn execute(config: Option<&Path>, db_path: Option<String>) -> anyhow::Result<()> {
    let session = Session::open(config, db_path)?;
    let report = check_health(&session.store).await?;
    println!(
        "✅ {} reachable at {} ({:.2?})",
        report.engine, session.config.database, report.latency
    );
    Ok(())
}
