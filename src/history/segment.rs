//! Splitting a transcript into per-hand blocks.

use std::iter::Peekable;
use std::str::Lines;

use super::patterns;

/// The lines of one hand, starting with its `Poker Hand #` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Block<'a> {
    /// The hand-start line. Never empty: a block only exists once a start
    /// marker has been seen.
    pub fn first_line(&self) -> &'a str {
        self.lines[0]
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// All lines joined back together, for block-wide marker searches.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Lazy iterator over the hand blocks of a transcript.
///
/// Text before the first hand-start marker is dropped. A transcript without
/// any marker yields nothing.
pub struct Blocks<'a> {
    lines: Peekable<Lines<'a>>,
}

impl<'a> Blocks<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().peekable(),
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // Skip preamble up to the next start marker
        let start = loop {
            let line = self.lines.next()?;
            if patterns::is_block_start(line) {
                break line;
            }
        };

        let mut lines = vec![start];
        while let Some(line) = self.lines.next_if(|l| !patterns::is_block_start(l)) {
            lines.push(line);
        }

        Some(Block { lines })
    }
}

/// Split a transcript into hand blocks.
pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks::new(text)
}
