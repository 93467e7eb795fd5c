use crate::error::PositivadorError;

/// Names of the bundled SQL templates.
pub mod templates {
    pub const SUMMARY: &str = "summary.sql";
    pub const DETAILS: &str = "details.sql";
    pub const ADVISORS: &str = "advisors.sql";
}

pub trait TemplateEngine: Send + Sync {
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String, PositivadorError>;
}
