// positivador-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum PositivadorError {
    // --- DOMAIN ERRORS (schema resolution, table naming) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (store, IO, config, templates) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- GENERIC / APPLICATION ERRORS ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for PositivadorError {
    fn from(err: std::io::Error) -> Self {
        PositivadorError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<duckdb::Error> for PositivadorError {
    fn from(err: duckdb::Error) -> Self {
        PositivadorError::Infrastructure(InfrastructureError::from(err))
    }
}
