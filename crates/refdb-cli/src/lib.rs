//! CLI library components for the reference database validator.

pub mod logging;
pub mod render;
