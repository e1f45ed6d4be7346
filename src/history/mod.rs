//! Hand-history transcript parsing.
//!
//! A transcript is loosely formatted text with many hands concatenated. This
//! module cuts it into blocks, one per hand, and reads each block into a
//! [`HandRecord`]: header timestamp, the hero's hole cards, whether the hero
//! won, and the street the hand ended on.
//!
//! Blocks that cannot be read are not errors. They come back as a
//! [`BlockSkip`] describing why the block contributes nothing.
//!
//! # Module Structure
//!
//! - [`patterns`] - Named line matchers
//! - [`segment`] - Block segmentation
//! - [`stage`] - End-of-hand street classification
//! - [`record`] - Block to record parsing

pub mod patterns;
mod record;
mod segment;
mod stage;

pub use patterns::{Street, WinIdiom};
pub use record::{parse_winning, win_idiom, BlockSkip, HandRecord};
pub use segment::{blocks, Block, Blocks};
pub use stage::Stage;
