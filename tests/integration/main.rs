//! Integration tests for the plowins binary and library.

mod config_test;
mod helpers;
mod scan_test;
mod shapes_test;
