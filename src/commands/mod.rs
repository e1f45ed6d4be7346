//! Subcommand handlers for the plowins binary.

pub mod config;
pub mod scan;
pub mod shapes;
