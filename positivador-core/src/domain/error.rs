// positivador-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Column not found in {table}: {candidate} (or similar)")]
    #[diagnostic(
        code(positivador::domain::column_not_found),
        help("None of the known spellings nor the substring fallback matched a column.")
    )]
    ColumnNotFound { table: String, candidate: String },

    #[error("Invalid table naming pattern for prefix '{prefix}': {reason}")]
    #[diagnostic(code(positivador::domain::table_pattern))]
    InvalidTablePattern { prefix: String, reason: String },
}
