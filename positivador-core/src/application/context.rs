// positivador-core/src/application/context.rs

use crate::application::ports::TemplateEngine;
use crate::domain::project::ReportConfig;
use crate::ports::store::Store;

/// Everything a use case needs for one run: the store connection, the SQL
/// renderer and the naming configuration. Borrowed, never stored across runs.
#[derive(Clone, Copy)]
pub struct ReportContext<'a> {
    pub store: &'a dyn Store,
    pub renderer: &'a dyn TemplateEngine,
    pub config: &'a ReportConfig,
}

impl<'a> ReportContext<'a> {
    pub fn new(
        store: &'a dyn Store,
        renderer: &'a dyn TemplateEngine,
        config: &'a ReportConfig,
    ) -> Self {
        Self {
            store,
            renderer,
            config,
        }
    }
}
