//! Grouping win events by canonical label.
//!
//! Events arrive in whatever order the files were read. Each one is filed
//! under its label; only when the run is finished are the per-label lists
//! put in time order and reduced to one [`AggregateRow`] each.

mod types;

use std::collections::HashMap;

use crate::cards::Label;
use crate::history::HandRecord;

pub use types::{AggregateRow, WinEvent};

/// Owns every win event seen during a run, keyed by label.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    wins: HashMap<Label, Vec<WinEvent>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a winning hand under its label.
    pub fn record(&mut self, record: &HandRecord) {
        self.push(record.hand.label(), WinEvent::from(record));
    }

    pub fn push(&mut self, label: Label, event: WinEvent) {
        self.wins.entry(label).or_default().push(event);
    }

    /// Append all of `other`'s events after this aggregator's own.
    pub fn merge(&mut self, other: Aggregator) {
        for (label, events) in other.wins {
            self.wins.entry(label).or_default().extend(events);
        }
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.wins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wins.is_empty()
    }

    /// Total number of events across all labels.
    pub fn event_count(&self) -> usize {
        self.wins.values().map(Vec::len).sum()
    }

    /// Reduce to one row per label.
    ///
    /// Each label's events are stable-sorted by timestamp, so the earliest
    /// win decides day and stage and equal timestamps keep arrival order.
    /// Rows come out ordered by first-win day, then label.
    pub fn finish(self) -> Vec<AggregateRow> {
        let mut rows: Vec<AggregateRow> = self
            .wins
            .into_iter()
            .filter_map(|(label, mut events)| {
                events.sort_by_key(|e| e.timestamp);
                let first = events.first()?;
                Some(AggregateRow {
                    label,
                    first_win_day: first.day(),
                    first_win_stage: first.stage,
                    wins: events.into_iter().map(|e| e.exact).collect(),
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            a.first_win_day
                .cmp(&b.first_win_day)
                .then_with(|| a.label.cmp(&b.label))
        });
        rows
    }
}
