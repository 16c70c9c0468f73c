//! CLI library components for the resource card converter.

pub mod logging;
pub mod pipeline;
pub mod summary;
