//! CLI command implementations.

mod generate;
mod list;

pub use generate::generate;
pub use list::list_tables;
