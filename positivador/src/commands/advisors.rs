// positivador/src/commands/advisors.rs
//
// USE CASE: List every advisor id across the monthly tables.

use std::path::Path;

use positivador_core::application::list_advisors;

use super::Session;

pub async fn execute(
    config: Option<&Path>,
    db_path: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let session = Session::open(config, db_path)?;
    let advisors = list_advisors(&session.context()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&advisors)?);
    } else {
        for advisor in &advisors {
            println!("{advisor}");
        }
    }
    Ok(())
}
