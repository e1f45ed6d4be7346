//! Counters describing what a scan looked at and what it dropped.

use std::collections::BTreeMap;
use std::fmt;

use crate::history::BlockSkip;

/// Per-run scan statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Files read successfully
    pub files_scanned: usize,
    /// Files that could not be read
    pub files_skipped: usize,
    /// Hand blocks found
    pub blocks: usize,
    /// Winning four-card hands filed with the aggregator
    pub wins: usize,
    /// Dropped blocks by reason
    pub skipped: BTreeMap<&'static str, usize>,
}

impl ScanStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_skip(&mut self, skip: BlockSkip) {
        *self.skipped.entry(skip.reason()).or_default() += 1;
    }

    /// Total blocks dropped for any reason.
    pub fn skipped_blocks(&self) -> usize {
        self.skipped.values().sum()
    }

    /// Fold another scan's counters into this one.
    pub fn absorb(&mut self, other: &ScanStats) {
        self.files_scanned += other.files_scanned;
        self.files_skipped += other.files_skipped;
        self.blocks += other.blocks;
        self.wins += other.wins;
        for (reason, count) in &other.skipped {
            *self.skipped.entry(*reason).or_default() += count;
        }
    }
}

impl fmt::Display for ScanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s), {} hand(s), {} win(s)",
            self.files_scanned, self.blocks, self.wins
        )?;
        if self.files_skipped > 0 {
            write!(f, ", {} unreadable file(s)", self.files_skipped)?;
        }
        Ok(())
    }
}
