pub mod project;

pub use crate::domain::project::ReportConfig;
pub use project::{apply_env_overrides, load_report_config};
