// positivador-core/src/ports/mod.rs

pub mod store;

pub use store::{ColumnSchema, RawDetailRecord, Store, SummaryRecord};
