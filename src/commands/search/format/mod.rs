//! Search command output formatting modules

pub mod json;
pub mod table;

pub use json::output_json;
pub use table::output_table;
