//! Win events and the rows derived from them.

use chrono::{NaiveDate, NaiveDateTime};

use crate::cards::Label;
use crate::history::{HandRecord, Stage};

/// One winning occurrence of a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinEvent {
    pub timestamp: NaiveDateTime,
    pub stage: Stage,
    /// Cards exactly as dealt, e.g. `AhAsKhKs`
    pub exact: String,
}

impl WinEvent {
    pub fn new(timestamp: NaiveDateTime, stage: Stage, exact: impl Into<String>) -> Self {
        Self {
            timestamp,
            stage,
            exact: exact.into(),
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

impl From<&HandRecord> for WinEvent {
    fn from(record: &HandRecord) -> Self {
        Self::new(record.timestamp, record.stage, record.exact.clone())
    }
}

/// Final summary for one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow {
    pub label: Label,
    pub first_win_day: NaiveDate,
    pub first_win_stage: Stage,
    /// Exact-suit strings of every win, oldest first
    pub wins: Vec<String>,
}
