pub mod renderer;

pub use renderer::{TemplateEngine, templates};
