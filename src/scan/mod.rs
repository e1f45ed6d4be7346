//! Scanning transcripts into an [`Aggregator`].
//!
//! The per-file work (segment, parse, canonicalize) is pure and produces a
//! private aggregator for that file. The run-wide aggregator is only ever
//! touched by the calling thread, which merges file results in sorted file
//! order. That keeps parallel and sequential runs byte-for-byte identical.

mod stats;

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::aggregate::Aggregator;
use crate::files;
use crate::history::{self, BlockSkip};

pub use stats::ScanStats;

/// Result of scanning one or more transcripts.
#[derive(Debug, Clone, Default)]
pub struct Scan {
    pub aggregator: Aggregator,
    pub stats: ScanStats,
}

impl Scan {
    /// Merge another scan's events and counters into this one.
    pub fn merge(&mut self, other: Scan) {
        self.aggregator.merge(other.aggregator);
        self.stats.absorb(&other.stats);
    }
}

/// Scan the text of one transcript.
pub fn scan_text(text: &str) -> Scan {
    let mut scan = Scan::default();

    for block in history::blocks(text) {
        scan.stats.blocks += 1;
        match history::parse_winning(&block) {
            Ok(record) => {
                scan.aggregator.record(&record);
                scan.stats.wins += 1;
            }
            Err(skip) => {
                if skip != BlockSkip::NotWon {
                    tracing::debug!(
                        header = block.first_line(),
                        reason = skip.reason(),
                        "skipping hand"
                    );
                }
                scan.stats.count_skip(skip);
            }
        }
    }

    scan
}

/// Scan one file. An unreadable file contributes nothing and is counted as
/// skipped.
pub fn scan_file(path: &Path) -> Scan {
    match files::read_lossy(path) {
        Ok(text) => {
            let mut scan = scan_text(&text);
            scan.stats.files_scanned = 1;
            tracing::debug!(
                path = %path.display(),
                hands = scan.stats.blocks,
                wins = scan.stats.wins,
                "scanned file"
            );
            scan
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
            Scan {
                stats: ScanStats {
                    files_skipped: 1,
                    ..Default::default()
                },
                ..Default::default()
            }
        }
    }
}

/// Scan files in the given order.
///
/// With `parallel` set, files are parsed on the rayon pool; results are
/// still merged one at a time, in input order, on this thread.
pub fn scan_files(paths: &[PathBuf], parallel: bool) -> Scan {
    let per_file: Vec<Scan> = if parallel {
        paths.par_iter().map(|p| scan_file(p)).collect()
    } else {
        paths.iter().map(|p| scan_file(p)).collect()
    };

    let mut total = Scan::default();
    for scan in per_file {
        total.merge(scan);
    }

    tracing::info!(
        files = total.stats.files_scanned,
        unreadable = total.stats.files_skipped,
        hands = total.stats.blocks,
        wins = total.stats.wins,
        labels = total.aggregator.len(),
        "scan complete"
    );
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Stage;
    use std::fs;
    use tempfile::TempDir;

    fn hand(id: &str, ts: &str, cards: &str, body: &str) -> String {
        format!(
            "Poker Hand #{id}: PLO ($0.05/$0.10) - {ts}\n\
             Table 'Alpha' 6-max Seat #1 is the button\n\
             *** HOLE CARDS ***\n\
             Dealt to Hero [{cards}]\n\
             {body}\n\n"
        )
    }

    #[test]
    fn single_winning_hand_gives_single_row() {
        let text = hand(
            "RC1",
            "2024/01/05 10:00:00",
            "Ah Kd Qh Js",
            "Hero collected $0.25 from pot",
        );
        let scan = scan_text(&text);
        let rows = scan.aggregator.finish();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label.to_string(), "AKQJs");
        assert_eq!(rows[0].first_win_stage, Stage::Preflop);
        assert_eq!(rows[0].wins, vec!["AhKdQhJs"]);
    }

    #[test]
    fn non_winning_and_broken_blocks_are_counted_not_recorded() {
        let mut text = String::from("preamble that is ignored\n");
        text += &hand("RC1", "2024/01/05 10:00:00", "Ah Kd Qh Js", "Villain collected $0.25 from pot");
        text += &hand("RC2", "2024/01/05 10:01:00", "Ah Kd Qh Js 2c", "Hero collected $0.25 from pot");
        text += &hand("RC3", "not a time", "Ah Kd Qh Js", "Hero collected $0.25 from pot");
        text += &hand("RC4", "2024/01/05 10:03:00", "9c 8c 7d 6d", "*** FLOP *** [2c 3d 4h]\nHero won ($1.00)");

        let scan = scan_text(&text);
        assert_eq!(scan.stats.blocks, 4);
        assert_eq!(scan.stats.wins, 1);
        assert_eq!(scan.stats.skipped_blocks(), 3);

        let rows = scan.aggregator.finish();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label.to_string(), "9876d");
        assert_eq!(rows[0].first_win_stage, Stage::Flop);
    }

    #[test]
    fn files_merge_into_one_row_per_label() {
        let temp = TempDir::new().unwrap();
        let later = temp.path().join("a.txt");
        let earlier = temp.path().join("b.txt");
        fs::write(
            &later,
            hand("RC1", "2024/02/10 12:00:00", "Ah As Kh Ks", "*** FLOP *** [2c 3d 4h]\nHero collected $5 from pot"),
        )
        .unwrap();
        fs::write(
            &earlier,
            hand("RC2", "2024/02/01 12:00:00", "Kd Ad Kc Ac", "Villain: shows [Qc Qd 2h 3s]\nHero collected $5 from pot"),
        )
        .unwrap();

        for parallel in [false, true] {
            let scan = scan_files(&[later.clone(), earlier.clone()], parallel);
            let rows = scan.aggregator.finish();

            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].label.to_string(), "AAKKd");
            assert_eq!(rows[0].first_win_day.to_string(), "2024-02-01");
            assert_eq!(rows[0].first_win_stage, Stage::Showdown);
            assert_eq!(rows[0].wins, vec!["KdAdKcAc", "AhAsKhKs"]);
            assert_eq!(scan.stats.files_scanned, 2);
        }
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.txt");
        fs::write(
            &good,
            hand("RC1", "2024/02/10 12:00:00", "Ah Kh Qh Jh", "Hero won ($1.00)"),
        )
        .unwrap();
        let missing = temp.path().join("gone.txt");

        let scan = scan_files(&[missing, good], false);
        assert_eq!(scan.stats.files_skipped, 1);
        assert_eq!(scan.stats.files_scanned, 1);
        assert_eq!(scan.aggregator.finish()[0].label.to_string(), "AKQJm");
    }
}
