//! Shared output helpers for the read commands
//!
//! JSON output is built by serializing the stored entity and merging the
//! computed fields into the same object. Table output for single entities is
//! a two-column field/value listing followed by the markdown body.

pub mod json;
pub mod table;

pub use json::{entity_json, print_success};
pub use table::{list_footer, render_details};
