//! Scan command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use plowins::cli::ScanArgs;
use plowins::{files, scan, table, Config};

/// Scan the input, aggregate wins, and write the table.
pub fn handle(args: &ScanArgs, config: &Config) -> Result<()> {
    let found = files::discover(&args.input, config.scan.extensions.as_slice())?;
    if found.files.is_empty() {
        tracing::warn!(input = %args.input.display(), "no hand-history files found");
    }

    let parallel = args.parallel || config.scan.parallel;
    let mut result = scan::scan_files(&found.files, parallel);
    result.stats.files_skipped += found.unreadable;
    let stats = result.stats.clone();
    let rows = result.aggregator.finish();

    let output = output_path(args, config);
    table::write_table(&rows, &output)
        .with_context(|| format!("Failed to write table to {}", output.display()))?;

    // Keep stdout clean when the table itself goes there
    if output.as_os_str() == "-" {
        eprintln!("Scanned {}", stats);
    } else {
        println!("Scanned {}", stats);
        println!("Wrote {} rows to {}", rows.len(), output.display());
    }

    Ok(())
}

fn output_path(args: &ScanArgs, config: &Config) -> PathBuf {
    match &args.output {
        Some(path) => path.clone(),
        None => config
            .output
            .dir
            .join(format!("{}.csv", files::output_stem(&args.input))),
    }
}
