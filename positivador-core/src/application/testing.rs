// positivador-core/src/application/testing.rs
//
// In-memory Store used by the use-case tests.

#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::compiler::quote_ident;
use crate::domain::project::ReportConfig;
use crate::error::PositivadorError;
use crate::infrastructure::compiler::SqlRenderer;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::store::{ColumnSchema, RawDetailRecord, Store, SummaryRecord};

#[derive(Clone, Default)]
pub struct MockTable {
    pub name: String,
    pub columns: Vec<String>,
    pub summary: Vec<SummaryRecord>,
    pub details: Vec<RawDetailRecord>,
}

impl MockTable {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_summary(
        mut self,
        advisor: &str,
        activations: i64,
        fundraising: f64,
        revenue: f64,
    ) -> Self {
        self.summary.push(SummaryRecord {
            advisor: advisor.to_string(),
            activations,
            fundraising,
            revenue,
        });
        self
    }

    pub fn with_detail(mut self, record: RawDetailRecord) -> Self {
        self.details.push(record);
        self
    }
}

#[derive(Clone, Default)]
pub struct MockStore {
    pub tables: Vec<MockTable>,
    pub executed_queries: Arc<Mutex<Vec<String>>>,
    pub unreachable: bool,
}

impl MockStore {
    pub fn new(tables: Vec<MockTable>) -> Self {
        Self {
            tables,
            ..Default::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), PositivadorError> {
        if self.unreachable {
            return Err(InfrastructureError::Database(DatabaseError::Unreachable(
                "mock".into(),
            ))
            .into());
        }
        Ok(())
    }

    fn table_for(&self, sql: &str) -> Option<&MockTable> {
        self.executed_queries.lock().unwrap().push(sql.to_string());
        self.tables
            .iter()
            .find(|t| sql.contains(&quote_ident(&t.name)))
    }
}

#[async_trait]
impl Store for MockStore {
    async fn list_tables(
        &self,
        _schema: &str,
        prefix: &str,
    ) -> Result<Vec<String>, PositivadorError> {
        self.check()?;
        Ok(self
            .tables
            .iter()
            .filter(|t| t.name.to_lowercase().starts_with(&prefix.to_lowercase()))
            .map(|t| t.name.clone())
            .collect())
    }

    async fn fetch_columns(
        &self,
        _schema: &str,
        table: &str,
    ) -> Result<Vec<ColumnSchema>, PositivadorError> {
        self.check()?;
        let columns = self
            .tables
            .iter()
            .find(|t| t.name == table)
            .map(|t| t.columns.clone())
            .unwrap_or_default();
        Ok(columns
            .into_iter()
            .map(|name| ColumnSchema {
                name,
                data_type: "VARCHAR".into(),
                is_nullable: true,
            })
            .collect())
    }

    async fn query_summary(&self, sql: &str) -> Result<Vec<SummaryRecord>, PositivadorError> {
        self.check()?;
        Ok(self.table_for(sql).map(|t| t.summary.clone()).unwrap_or_default())
    }

    async fn query_details(&self, sql: &str) -> Result<Vec<RawDetailRecord>, PositivadorError> {
        self.check()?;
        Ok(self.table_for(sql).map(|t| t.details.clone()).unwrap_or_default())
    }

    async fn query_strings(&self, sql: &str) -> Result<Vec<Option<String>>, PositivadorError> {
        self.check()?;
        Ok(self
            .table_for(sql)
            .map(|t| t.summary.iter().map(|s| Some(s.advisor.clone())).collect())
            .unwrap_or_default())
    }

    async fn ping(&self) -> Result<(), PositivadorError> {
        self.check()
    }

    fn engine_name(&self) -> &str {
        "mock"
    }
}

/// Renderer plus a default configuration pinned to `year`.
pub fn context_parts(year: i32) -> Result<(SqlRenderer, ReportConfig), PositivadorError> {
    let config = ReportConfig {
        year,
        ..ReportConfig::default()
    };
    Ok((SqlRenderer::new()?, config))
}

/// The seven columns with the spellings used by the spreadsheet exports.
pub fn drifted_columns() -> [&'static str; 7] {
    [
        "assessor",
        "cliente",
        "Ativou em M?",
        "Evadiu em M?",
        "Net em M",
        "Receita no Mês",
        "Captação Líquida em M",
    ]
}

pub fn raw_detail(
    advisor: &str,
    client: &str,
    activation: &str,
    fundraising: &str,
) -> RawDetailRecord {
    RawDetailRecord {
        advisor: Some(advisor.to_string()),
        client: Some(client.to_string()),
        activation: Some(activation.to_string()),
        churn: Some("Não".to_string()),
        net_flow: Some("0".to_string()),
        revenue: Some("0".to_string()),
        fundraising: Some(fundraising.to_string()),
    }
}
