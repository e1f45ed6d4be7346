//! Suit patterns and canonical labels.
//!
//! Two hands share a [`Label`] when one can be turned into the other by
//! renaming suits. The rank part is just the ranks sorted high to low; the
//! suit part only looks at how many cards fall into each suit.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::{CardError, Hand, Rank, Suit};

/// How four cards distribute across suits.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum SuitPattern {
    /// `[4]` - all four cards share one suit
    Mono,
    /// `[3,1]` - three of one suit, one other
    Tri,
    /// `[2,2]` - two suits, two cards each
    Double,
    /// `[2,1,1]` - one suited pair plus two singletons
    Single,
    /// `[1,1,1,1]` - four distinct suits
    Rainbow,
}

impl SuitPattern {
    /// All patterns, in tag order m, t, d, s, r.
    pub const fn all() -> [SuitPattern; 5] {
        [
            SuitPattern::Mono,
            SuitPattern::Tri,
            SuitPattern::Double,
            SuitPattern::Single,
            SuitPattern::Rainbow,
        ]
    }

    /// Classify a hand by its per-suit card counts.
    pub fn of(hand: &Hand) -> Self {
        let mut counts = [0u8; 4];
        for card in hand.cards() {
            counts[suit_index(card.suit)] += 1;
        }
        counts.sort_unstable_by(|a, b| b.cmp(a));

        match counts {
            [4, ..] => SuitPattern::Mono,
            [3, ..] => SuitPattern::Tri,
            [2, 2, ..] => SuitPattern::Double,
            [2, ..] => SuitPattern::Single,
            _ => SuitPattern::Rainbow,
        }
    }

    pub fn tag(&self) -> char {
        match self {
            SuitPattern::Mono => 'm',
            SuitPattern::Tri => 't',
            SuitPattern::Double => 'd',
            SuitPattern::Single => 's',
            SuitPattern::Rainbow => 'r',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        SuitPattern::all().into_iter().find(|p| p.tag() == tag)
    }
}

fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// Canonical four-card shape, rendered as e.g. `AAKQr`.
///
/// Ordering follows the rendered string, which is the order rows are
/// emitted in when they share a first-win day.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Label {
    ranks: [Rank; 4],
    pattern: SuitPattern,
}

impl Label {
    pub fn of(hand: &Hand) -> Self {
        let mut ranks = hand.cards().map(|c| c.rank);
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        Self {
            ranks,
            pattern: SuitPattern::of(hand),
        }
    }

    /// Ranks from highest to lowest.
    pub fn ranks(&self) -> &[Rank; 4] {
        &self.ranks
    }

    pub fn pattern(&self) -> SuitPattern {
        self.pattern
    }

    fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.ranks
            .iter()
            .map(Rank::symbol)
            .chain(std::iter::once(self.pattern.tag()))
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chars().cmp(other.chars())
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl FromStr for Label {
    type Err = CardError;

    /// Accepts only already-canonical labels: four ranks high to low
    /// followed by a pattern tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CardError::InvalidLabel(s.to_string());
        let chars: Vec<char> = s.chars().collect();
        let [r0, r1, r2, r3, tag] = chars[..] else {
            return Err(invalid());
        };

        let ranks = [
            Rank::try_from(r0)?,
            Rank::try_from(r1)?,
            Rank::try_from(r2)?,
            Rank::try_from(r3)?,
        ];
        if ranks.windows(2).any(|w| w[0] < w[1]) {
            return Err(invalid());
        }
        let pattern = SuitPattern::from_tag(tag).ok_or_else(invalid)?;

        Ok(Self { ranks, pattern })
    }
}
