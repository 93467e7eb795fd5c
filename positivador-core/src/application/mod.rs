// positivador-core/src/application/mod.rs

pub mod advisors;
pub mod aggregator;
pub mod assembler;
pub mod context;
pub mod export;
pub mod health;
pub mod locator;
pub mod ports;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testing;

// The CLI only needs `use positivador_core::application::{build_payload, ...}`.
pub use advisors::list_advisors;
pub use aggregator::{TableExtract, extract_table};
pub use assembler::build_payload;
pub use context::ReportContext;
pub use export::{DEFAULT_EXPORT_FILE, render_detail_csv};
pub use health::{HealthReport, check_health};
pub use locator::list_tables;
pub use resolver::resolve_binding;
