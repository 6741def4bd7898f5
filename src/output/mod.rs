//! Output formatting for CLI results

pub mod formatters;
pub mod table;

pub use table::format_table;
