// positivador-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(positivador::infra::database::duckdb),
        help("The store rejected the query or is unreachable.")
    )]
    DuckDB(#[from] duckdb::Error),

    #[error("Database not found at '{0}'")]
    #[diagnostic(
        code(positivador::infra::database::unreachable),
        help("Check --db-path or the 'database' key of positivador.yaml.")
    )]
    Unreachable(String),

    #[error("Store connection lock poisoned")]
    #[diagnostic(code(positivador::infra::database::poisoned))]
    Poisoned,
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(positivador::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(positivador::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(positivador::infra::config))]
    ConfigError(String),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(positivador::infra::config_missing))]
    ConfigNotFound(String),

    // --- TEMPLATING ---
    #[error("SQL Template Error: {0}")]
    #[diagnostic(
        code(positivador::infra::template),
        help("A bundled SQL template failed to render.")
    )]
    TemplateError(#[from] minijinja::Error),

    // --- EXPORT ---
    #[error("CSV Export Error: {0}")]
    #[diagnostic(code(positivador::infra::csv))]
    Csv(#[from] csv::Error),
}

// Shortcut for `?` on duckdb calls
impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}
