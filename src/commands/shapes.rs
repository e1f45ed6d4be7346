//! Shapes command handler

use anyhow::Result;

use plowins::cards;

/// Print the number of distinct shapes, overall and per suit pattern.
pub fn handle() -> Result<()> {
    let census = cards::census();
    println!("{}", census.len());
    for (pattern, count) in census.by_pattern() {
        println!("  {}: {}", pattern.tag(), count);
    }
    Ok(())
}
