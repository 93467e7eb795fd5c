pub mod quoter;

pub use quoter::quote_ident;
