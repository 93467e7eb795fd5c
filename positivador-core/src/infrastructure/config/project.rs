// positivador-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::project::ReportConfig;
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 2] = ["positivador.yaml", "positivador.yml"];

/// Loads `positivador.yaml` from `project_dir` (or `explicit`), then applies
/// `POSITIVADOR_*` environment overrides and validates the result.
///
/// Without any file the defaults apply; an explicit path that does not exist
/// is an error.
#[instrument(skip(project_dir))]
pub fn load_report_config(
    project_dir: &Path,
    explicit: Option<&Path>,
) -> Result<ReportConfig, InfrastructureError> {
    let mut config = match find_config(project_dir, explicit)? {
        Some(path) => {
            info!(path = ?path, "Loading report configuration");
            parse_config(&fs::read_to_string(&path)?)?
        }
        None => {
            info!("No positivador.yaml found, using defaults");
            ReportConfig::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    config
        .validate()
        .map_err(|e| InfrastructureError::ConfigError(e.to_string()))?;
    Ok(config)
}

fn find_config(
    root: &Path,
    explicit: Option<&Path>,
) -> Result<Option<PathBuf>, InfrastructureError> {
    if let Some(path) = explicit {
        return if path.exists() {
            Ok(Some(path.to_path_buf()))
        } else {
            Err(InfrastructureError::ConfigNotFound(
                path.display().to_string(),
            ))
        };
    }
    Ok(CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists()))
}

fn parse_config(content: &str) -> Result<ReportConfig, InfrastructureError> {
    if content.trim().is_empty() {
        return Ok(ReportConfig::default());
    }
    Ok(serde_yaml::from_str(content)?)
}

/// Layering: `POSITIVADOR_DB_PATH=/data/bi.duckdb positivador metrics`
pub fn apply_env_overrides<F>(
    config: &mut ReportConfig,
    lookup: F,
) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("POSITIVADOR_DB_PATH") {
        info!(old = ?config.database, new = ?val, "Overriding database via ENV");
        config.database = val;
    }
    if let Some(val) = lookup("POSITIVADOR_SCHEMA") {
        info!(old = ?config.schema, new = ?val, "Overriding schema via ENV");
        config.schema = val;
    }
    if let Some(val) = lookup("POSITIVADOR_TABLE_PREFIX") {
        info!(old = ?config.table_prefix, new = ?val, "Overriding table prefix via ENV");
        config.table_prefix = val;
    }
    if let Some(val) = lookup("POSITIVADOR_YEAR") {
        let year = val.trim().parse::<i32>().map_err(|_| {
            InfrastructureError::ConfigError(format!("POSITIVADOR_YEAR is not a year: '{}'", val))
        })?;
        info!(old = config.year, new = year, "Overriding year via ENV");
        config.year = year;
    }
    Ok(())
}
