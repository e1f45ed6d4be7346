//! Turning a block into a [`HandRecord`].

use chrono::NaiveDateTime;

use super::patterns::{self, WinIdiom, TIMESTAMP_FORMAT};
use super::segment::Block;
use super::stage::Stage;
use crate::cards::{CardError, Hand};

/// One parsed hand from a transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandRecord {
    /// Site hand identifier, opaque
    pub id: String,
    /// Game description from the header, e.g. `PLO ($0.05/$0.10)`
    pub game: String,
    /// Local time of the hand, no timezone
    pub timestamp: NaiveDateTime,
    /// Hero's four cards in dealt order
    pub hand: Hand,
    /// Hero's card tokens as written in the transcript, concatenated
    pub exact: String,
    pub hero_won: bool,
    pub stage: Stage,
}

/// Why a block contributed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockSkip {
    /// Header missing or timestamp unparsable
    MalformedHeader,
    /// No `Dealt to Hero` line
    MissingHeroCards,
    /// Hero was dealt something other than four cards
    WrongArity(usize),
    /// A dealt card token could not be parsed
    BadCard,
    /// Hero did not win the pot
    NotWon,
}

impl BlockSkip {
    pub fn reason(&self) -> &'static str {
        match self {
            BlockSkip::MalformedHeader => "malformed header",
            BlockSkip::MissingHeroCards => "no hero cards",
            BlockSkip::WrongArity(_) => "not a four-card hand",
            BlockSkip::BadCard => "unreadable hero card",
            BlockSkip::NotWon => "hero did not win",
        }
    }
}

impl HandRecord {
    /// Parse a block. Hands the hero lost are still returned with
    /// `hero_won == false`; use [`parse_winning`] to keep only wins.
    pub fn parse(block: &Block<'_>) -> Result<Self, BlockSkip> {
        let fields = patterns::header(block.first_line()).ok_or(BlockSkip::MalformedHeader)?;
        let timestamp = NaiveDateTime::parse_from_str(fields.timestamp, TIMESTAMP_FORMAT)
            .map_err(|_| BlockSkip::MalformedHeader)?;

        let (hand, exact) = hero_hand(block)?;

        Ok(HandRecord {
            id: fields.id.to_string(),
            game: fields.game.to_string(),
            timestamp,
            hand,
            exact,
            hero_won: win_idiom(block).is_some(),
            stage: Stage::classify(block),
        })
    }
}

/// Parse a block and keep it only if the hero won.
pub fn parse_winning(block: &Block<'_>) -> Result<HandRecord, BlockSkip> {
    let record = HandRecord::parse(block)?;
    if record.hero_won {
        Ok(record)
    } else {
        Err(BlockSkip::NotWon)
    }
}

/// The hero's hand from the first `Dealt to Hero` line, with its raw text.
fn hero_hand(block: &Block<'_>) -> Result<(Hand, String), BlockSkip> {
    let tokens = block
        .lines()
        .iter()
        .find_map(|line| patterns::hero_cards(line))
        .ok_or(BlockSkip::MissingHeroCards)?;

    let hand = Hand::parse_tokens(tokens).map_err(|e| match e {
        CardError::WrongArity(n) => BlockSkip::WrongArity(n),
        _ => BlockSkip::BadCard,
    })?;
    Ok((hand, tokens.split_whitespace().collect()))
}

/// First line announcing a hero win, if any.
pub fn win_idiom(block: &Block<'_>) -> Option<WinIdiom> {
    block.lines().iter().find_map(|line| patterns::win_idiom(line))
}
