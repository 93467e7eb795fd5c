pub mod jinja;

pub use jinja::SqlRenderer;
