// positivador-core/src/domain/project/configuration.rs

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Where the monthly tables live and how they are named.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
#[serde(rename_all = "kebab-case")]
pub struct ReportConfig {
    /// DuckDB database file (or `:memory:`).
    #[serde(default = "default_database")]
    #[validate(length(min = 1))]
    pub database: String,

    #[serde(default = "default_schema")]
    #[validate(length(min = 1))]
    pub schema: String,

    #[serde(default = "default_table_prefix")]
    #[validate(length(min = 1))]
    pub table_prefix: String,

    /// Reporting year; only `<prefix><month>_<year>` tables are read.
    #[serde(default = "default_year")]
    #[validate(range(min = 1900, max = 9999))]
    pub year: i32,

    /// Fixed advisor id column, never resolved against drift.
    #[serde(default = "default_advisor_column")]
    #[validate(length(min = 1))]
    pub advisor_column: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            schema: default_schema(),
            table_prefix: default_table_prefix(),
            year: default_year(),
            advisor_column: default_advisor_column(),
        }
    }
}

fn default_database() -> String {
    "positivador.duckdb".to_string()
}
fn default_schema() -> String {
    "main".to_string()
}
fn default_table_prefix() -> String {
    "relatorio_positivador_".to_string()
}
fn default_year() -> i32 {
    chrono::Local::now().year()
}
fn default_advisor_column() -> String {
    "assessor".to_string()
}
