// positivador/src/commands/mod.rs

pub mod advisors;
pub mod export;
pub mod health;
pub mod metrics;
pub mod tables;

use anyhow::Context;
use std::path::Path;

use positivador_core::application::ReportContext;
use positivador_core::domain::project::ReportConfig;
use positivador_core::infrastructure::adapters::DuckDBStore;
use positivador_core::infrastructure::compiler::SqlRenderer;
use positivador_core::infrastructure::config::load_report_config;

/// Store connection, renderer and configuration for one command run.
/// The connection is released when the session is dropped.
pub struct Session {
    pub store: DuckDBStore,
    pub renderer: SqlRenderer,
    pub config: ReportConfig,
}

impl Session {
    pub fn open(config_path: Option<&Path>, db_path: Option<String>) -> anyhow::Result<Self> {
        let mut config = load_report_config(Path::new("."), config_path)
            .context("Failed to load positivador configuration")?;
        if let Some(path) = db_path {
            config.database = path;
        }

        let store = DuckDBStore::connect(&config.database)
            .with_context(|| format!("Failed to open DuckDB at {}", config.database))?;
        let renderer = SqlRenderer::new().context("Failed to load SQL templates")?;

        Ok(Self {
            store,
            renderer,
            config,
        })
    }

    pub fn context(&self) -> ReportContext<'_> {
        ReportContext::new(&self.store, &self.renderer, &self.config)
    }
}
