// positivador/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use positivador_core::application::DEFAULT_EXPORT_FILE;

#[derive(Parser)]
#[command(name = "positivador")]
#[command(about = "Monthly positivador metrics and targets per advisor", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: ./positivador.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// DuckDB database file, overrides the configuration
    #[arg(long, global = true)]
    pub db_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🗂️  Lists the monthly tables of the reporting year
    Tables {
        /// Keep only the first N tables (by name)
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// 👥 Lists every advisor id found in the monthly tables
    Advisors {
        #[arg(long)]
        json: bool,
    },

    /// 📈 Builds the dashboard payload (series, matrices, targets, details)
    Metrics {
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,

        /// Comma-separated advisor ids (ex: "A1,B22")
        #[arg(long)]
        advisors: Option<String>,

        /// Write the JSON here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// 📄 Exports the detail rows as CSV
    Export {
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,

        #[arg(long)]
        advisors: Option<String>,

        /// Destination file, "-" for stdout
        #[arg(long, short, default_value = DEFAULT_EXPORT_FILE)]
        output: String,
    },

    /// 🩺 Checks that the database answers
    Health,
}
