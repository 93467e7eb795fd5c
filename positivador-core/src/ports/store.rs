// positivador-core/src/ports/store.rs

// What the pipeline needs from the relational store, without knowing which
// engine answers. Every method is one round-trip.

use crate::error::PositivadorError;
use async_trait::async_trait;

// Column description, independent of the engine
#[derive(Debug, Clone)]
pub struct ColumnSchema {
    pub name: String,
    pub data_type: String,
    pub is_nullable: bool,
}

impl ColumnSchema {
    /// `Receita no Mês VARCHAR`, `cliente BIGINT NOT NULL`
    pub fn describe(&self) -> String {
        let null = if self.is_nullable { "" } else { " NOT NULL" };
        format!("{} {}{}", self.name, self.data_type, null)
    }
}

/// Row of the grouped aggregate query.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRecord {
    pub advisor: String,
    pub activations: i64,
    pub fundraising: f64,
    pub revenue: f64,
}

/// Row of the full-scan query, every cell as nullable text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDetailRecord {
    pub advisor: Option<String>,
    pub client: Option<String>,
    pub activation: Option<String>,
    pub churn: Option<String>,
    pub net_flow: Option<String>,
    pub revenue: Option<String>,
    pub fundraising: Option<String>,
}

#[async_trait]
pub trait Store: Send + Sync {
    /// Base tables of `schema` whose name starts with `prefix` (case-insensitive).
    async fn list_tables(&self, schema: &str, prefix: &str)
    -> Result<Vec<String>, PositivadorError>;

    /// Columns of a table in ordinal order.
    async fn fetch_columns(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<Vec<ColumnSchema>, PositivadorError>;

    /// Runs a query shaped `(advisor, activations, fundraising, revenue)`.
    async fn query_summary(&self, sql: &str) -> Result<Vec<SummaryRecord>, PositivadorError>;

    /// Runs a query projecting the seven detail fields as text.
    async fn query_details(&self, sql: &str) -> Result<Vec<RawDetailRecord>, PositivadorError>;

    /// Runs a single-column text query.
    async fn query_strings(&self, sql: &str) -> Result<Vec<Option<String>>, PositivadorError>;

    /// Cheap liveness probe.
    async fn ping(&self) -> Result<(), PositivadorError>;

    fn engine_name(&self) -> &str;
}
