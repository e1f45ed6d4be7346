//! plowins - first wins of every PLO4 starting-hand shape.
//!
//! Reads poker hand-history transcripts, keeps the hands the hero won with
//! four hole cards, collapses each hand to its suit-invariant shape, and
//! reports when and on which street each shape first won.
//!
//! The pipeline, one module per concern:
//!
//! - [`files`] - finds transcripts and reads them tolerantly
//! - [`history`] - cuts transcripts into hands and parses each one
//! - [`cards`] - card types and shape canonicalization
//! - [`aggregate`] - groups wins by shape and picks the earliest
//! - [`scan`] - drives the above over a list of files
//! - [`table`] - writes the CSV result

pub mod aggregate;
pub mod cards;
pub mod cli;
pub mod config;
pub mod files;
pub mod history;
pub mod logging;
pub mod scan;
pub mod table;

pub use aggregate::{AggregateRow, Aggregator, WinEvent};
pub use cards::{Card, Hand, Label, Rank, Suit, SuitPattern};
pub use config::Config;
pub use history::{HandRecord, Stage};

/// Version shown by `--version`: package version plus git hash and build
/// date for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION_STRING: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", ",
    env!("PLOWINS_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
