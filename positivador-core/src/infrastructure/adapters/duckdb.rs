// positivador-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::{AccessMode, Config, Connection, params};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, instrument};

use crate::error::PositivadorError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use crate::ports::store::{ColumnSchema, RawDetailRecord, Store, SummaryRecord};

/// One DuckDB connection, held for the lifetime of the store and released on drop.
pub struct DuckDBStore {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDBStore {
    /// Opens (or creates) a read-write database. `:memory:` opens an in-memory one.
    pub fn new(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)?
        } else {
            Connection::open_with_flags(db_path, config)?
        };

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens an existing database read-only. A missing file is a connectivity
    /// failure rather than an empty new database.
    pub fn connect(db_path: &str) -> Result<Self, InfrastructureError> {
        if db_path == ":memory:" {
            return Self::new(db_path);
        }
        if !Path::new(db_path).exists() {
            return Err(DatabaseError::Unreachable(db_path.to_string()).into());
        }

        let config = Config::default().access_mode(AccessMode::ReadOnly)?;
        let conn = Connection::open_with_flags(db_path, config)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs DDL/DML statements (seeding, fixtures).
    pub fn execute_batch(&self, sql: &str) -> Result<(), PositivadorError> {
        self.lock()?.execute_batch(sql).map_err(db_error)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, PositivadorError> {
        self.conn.lock().map_err(|_| {
            PositivadorError::Infrastructure(InfrastructureError::Database(DatabaseError::Poisoned))
        })
    }
}

fn db_error(err: duckdb::Error) -> PositivadorError {
    PositivadorError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(err)))
}

#[async_trait]
impl Store for DuckDBStore {
    #[instrument(skip(self))]
    async fn list_tables(
        &self,
        schema: &str,
        prefix: &str,
    ) -> Result<Vec<String>, PositivadorError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT table_name FROM information_schema.tables \
                 WHERE table_schema = ? AND table_type = 'BASE TABLE' \
                 AND starts_with(lower(table_name), lower(?)) \
                 ORDER BY table_name",
            )
            .map_err(db_error)?;

        let names = stmt
            .query_map(params![schema, prefix], |row| row.get::<_, String>(0))
            .map_err(db_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;

        debug!(count = names.len(), "Catalog lookup done");
        Ok(names)
    }

    #[instrument(skip(self))]
    async fn fetch_columns(
        &self,
        schema: &str,
        table: &str,
    ) -> Result<Vec<ColumnSchema>, PositivadorError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT column_name, data_type, is_nullable FROM information_schema.columns \
                 WHERE table_schema = ? AND table_name = ? \
                 ORDER BY ordinal_position",
            )
            .map_err(db_error)?;

        let columns = stmt
            .query_map(params![schema, table], |row| {
                Ok(ColumnSchema {
                    name: row.get(0)?,
                    data_type: row.get(1)?,
                    is_nullable: row.get::<_, String>(2)? == "YES",
                })
            })
            .map_err(db_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;

        Ok(columns)
    }

    async fn query_summary(&self, sql: &str) -> Result<Vec<SummaryRecord>, PositivadorError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql).map_err(db_error)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(SummaryRecord {
                    advisor: row.get(0)?,
                    activations: row.get(1)?,
                    fundraising: row.get(2)?,
                    revenue: row.get(3)?,
                })
            })
            .map_err(db_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;

        Ok(rows)
    }

    async fn query_details(&self, sql: &str) -> Result<Vec<RawDetailRecord>, PositivadorError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql).map_err(db_error)?;

        let rows = stmt
            .query_map([], |row| {
                Ok(RawDetailRecord {
                    advisor: row.get(0)?,
                    client: row.get(1)?,
                    activation: row.get(2)?,
                    churn: row.get(3)?,
                    net_flow: row.get(4)?,
                    revenue: row.get(5)?,
                    fundraising: row.get(6)?,
                })
            })
            .map_err(db_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;

        Ok(rows)
    }

    async fn query_strings(&self, sql: &str) -> Result<Vec<Option<String>>, PositivadorError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(sql).map_err(db_error)?;

        let values = stmt
            .query_map([], |row| row.get::<_, Option<String>>(0))
            .map_err(db_error)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_error)?;

        Ok(values)
    }

    async fn ping(&self) -> Result<(), PositivadorError> {
        let conn = self.lock()?;
        let one: i32 = conn
            .query_row("SELECT 1", [], |row| row.get(0))
            .map_err(db_error)?;
        if one == 1 {
            Ok(())
        } else {
            Err(PositivadorError::InternalError(format!(
                "Unexpected probe result: {one}"
            )))
        }
    }

    fn engine_name(&self) -> &str {
        "duckdb"
    }
}
