//! Resource card output.
//!
//! Writes the normalized cards as the JSON document consumed by the catalog
//! front end.

mod error;
mod json;

pub use error::{OutputError, Result};
pub use json::{WriteSummary, render_cards, write_cards};
