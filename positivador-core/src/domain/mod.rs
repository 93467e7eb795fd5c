pub mod calendar;
pub mod columns;
pub mod compiler;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod payload;
pub mod project;
pub mod targets;

// Convenience re-exports
pub use calendar::{MonthKey, SourceTable, TablePattern};
pub use columns::{ColumnBinding, SemanticField};
pub use error::DomainError;
pub use filter::AdvisorFilter;
pub use payload::{DetailRow, Payload, SummaryRow};
