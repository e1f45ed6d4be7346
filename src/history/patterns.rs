//! Named line matchers for hand-history transcripts.
//!
//! Each matcher is a pre-compiled regex with a small predicate or extractor
//! in front of it, so the parsing rules stay in one place and can be tested
//! line by line.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! line_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($regex_str).expect("line pattern must compile"));
    };
}

line_pattern!(RE_BLOCK_START, r"^Poker Hand #");
line_pattern!(
    RE_HEADER,
    r"Poker Hand #(?P<id>\S+): (?P<game>.+?) - (?P<ts>\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2})"
);
line_pattern!(RE_HERO_DEALT, r"^Dealt to Hero \[(?P<cards>[^\]]+)\]$");

// ── Win declarations ───────────────────────────────────────────────────────
line_pattern!(RE_WIN_COLLECTED, r"^Hero collected \$(\d[\d.]*) from pot");
line_pattern!(RE_WIN_SEAT, r"^Seat \d+: Hero .* (won|collected) \(\$[\d.]+\)");
line_pattern!(RE_WIN_SUMMARY, r"^Hero won \(\$[\d.]+\)");

// ── Streets ────────────────────────────────────────────────────────────────
line_pattern!(RE_FLOP, r"(?i)\*\*\*\s*FLOP(?:\s*\*\*\*)?");
line_pattern!(RE_TURN, r"(?i)\*\*\*\s*TURN(?:\s*\*\*\*)?");
line_pattern!(RE_RIVER, r"(?i)\*\*\*\s*RIVER(?:\s*\*\*\*)?");
line_pattern!(RE_SHOWDOWN, r"(?i)( shows \[| showed \[)");

/// Timestamp layout used in hand headers.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Raw fields of a hand header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderFields<'a> {
    pub id: &'a str,
    pub game: &'a str,
    pub timestamp: &'a str,
}

/// The three ways a transcript says the hero took a pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinIdiom {
    /// `Hero collected $12.50 from pot`
    Collected,
    /// `Seat 3: Hero (button) won ($12.50)`
    SeatSummary,
    /// `Hero won ($12.50)`
    Summary,
}

/// Community-card street markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Street {
    Flop,
    Turn,
    River,
}

impl Street {
    fn regex(&self) -> &'static Regex {
        match self {
            Street::Flop => LazyLock::force(&RE_FLOP),
            Street::Turn => LazyLock::force(&RE_TURN),
            Street::River => LazyLock::force(&RE_RIVER),
        }
    }
}

/// Does this line open a new hand?
pub fn is_block_start(line: &str) -> bool {
    RE_BLOCK_START.is_match(line)
}

/// Pull id, game and timestamp out of a header line.
pub fn header(line: &str) -> Option<HeaderFields<'_>> {
    let caps = RE_HEADER.captures(line)?;
    Some(HeaderFields {
        id: caps.name("id")?.as_str(),
        game: caps.name("game")?.as_str(),
        timestamp: caps.name("ts")?.as_str(),
    })
}

/// The bracketed card list of a `Dealt to Hero [...]` line.
pub fn hero_cards(line: &str) -> Option<&str> {
    RE_HERO_DEALT
        .captures(line)
        .and_then(|caps| caps.name("cards"))
        .map(|m| m.as_str())
}

/// Which win idiom, if any, this line uses.
pub fn win_idiom(line: &str) -> Option<WinIdiom> {
    if RE_WIN_COLLECTED.is_match(line) {
        Some(WinIdiom::Collected)
    } else if RE_WIN_SEAT.is_match(line) {
        Some(WinIdiom::SeatSummary)
    } else if RE_WIN_SUMMARY.is_match(line) {
        Some(WinIdiom::Summary)
    } else {
        None
    }
}

/// Does this line reveal cards at showdown?
pub fn is_showdown(line: &str) -> bool {
    RE_SHOWDOWN.is_match(line)
}

/// Does the street marker appear anywhere in the text?
pub fn has_street(text: &str, street: Street) -> bool {
    street.regex().is_match(text)
}
