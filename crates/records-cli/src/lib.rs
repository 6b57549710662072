//! CLI library components for the records tool.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod render;
