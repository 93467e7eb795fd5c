// positivador-core/src/infrastructure/compiler/jinja.rs

// Renders the bundled SQL templates (aggregate, full scan, distinct advisors)
// into queries the store can run. Identifiers always go through `ident`.

use minijinja::Environment;

use crate::application::ports::{TemplateEngine, templates};
use crate::domain::compiler::quote_ident;
use crate::error::PositivadorError;
use crate::infrastructure::error::InfrastructureError;

const MACROS: &str = include_str!("../../../templates/macros.sql");
const SUMMARY: &str = include_str!("../../../templates/summary.sql");
const DETAILS: &str = include_str!("../../../templates/details.sql");
const ADVISORS: &str = include_str!("../../../templates/advisors.sql");

pub struct SqlRenderer {
    env: Environment<'static>,
}

impl SqlRenderer {
    pub fn new() -> Result<Self, InfrastructureError> {
        let mut env = Environment::new();

        // "Captação Líquida em M" -> "\"Captação Líquida em M\""
        env.add_filter("ident", |value: String| quote_ident(&value));

        env.add_template("macros.sql", MACROS)?;
        env.add_template(templates::SUMMARY, SUMMARY)?;
        env.add_template(templates::DETAILS, DETAILS)?;
        env.add_template(templates::ADVISORS, ADVISORS)?;

        Ok(Self { env })
    }
}

impl TemplateEngine for SqlRenderer {
    fn render(&self, name: &str, context: &serde_json::Value) -> Result<String, PositivadorError> {
        let sql = self
            .env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(context))
            .map_err(InfrastructureError::TemplateError)?;
        tracing::debug!(template = name, "Rendered SQL:\n{}", sql);
        Ok(sql)
    }
}
