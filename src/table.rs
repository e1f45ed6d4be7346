//! CSV output of aggregated rows.
//!
//! Columns are `hand`, `first_win_day`, `first_win_situation` and `wins`.
//! The `wins` cell holds a JSON array of exact-suit strings, oldest first.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::aggregate::AggregateRow;

/// Column headers, in order.
pub const COLUMNS: [&str; 4] = ["hand", "first_win_day", "first_win_situation", "wins"];

/// Write rows as CSV to any writer.
pub fn write_csv<W: Write>(rows: &[AggregateRow], writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(COLUMNS)?;

    for row in rows {
        let wins = serde_json::to_string(&row.wins).context("Failed to serialize wins")?;
        csv.write_record([
            row.label.to_string(),
            row.first_win_day.format("%Y-%m-%d").to_string(),
            row.first_win_stage.to_string(),
            wins,
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Write rows to `path`, creating parent directories. A path of `-` writes
/// to stdout.
pub fn write_table(rows: &[AggregateRow], path: &Path) -> Result<()> {
    if path == Path::new("-") {
        return write_csv(rows, io::stdout().lock());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }
    let file =
        fs::File::create(path).with_context(|| format!("Failed to create file: {:?}", path))?;
    write_csv(rows, file)
}
