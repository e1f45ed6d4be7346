//! Enumeration of every reachable four-card shape.
//!
//! Walks all C(52,4) combinations of a full deck and collects the distinct
//! labels. Useful as a sanity check on the canonicalization rule and as the
//! denominator when reporting how many shapes a player has won with.

use std::collections::{BTreeMap, BTreeSet};

use super::{Card, Hand, Label, Rank, Suit, SuitPattern};

/// Distinct labels reachable from a 52-card deck.
#[derive(Debug, Clone, Default)]
pub struct Census {
    labels: BTreeSet<Label>,
}

impl Census {
    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn contains(&self, label: &Label) -> bool {
        self.labels.contains(label)
    }

    /// Label count per suit pattern, every pattern present (possibly zero).
    pub fn by_pattern(&self) -> BTreeMap<SuitPattern, usize> {
        let mut counts: BTreeMap<SuitPattern, usize> =
            SuitPattern::all().into_iter().map(|p| (p, 0)).collect();
        for label in &self.labels {
            *counts.entry(label.pattern()).or_default() += 1;
        }
        counts
    }

    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }
}

/// Enumerate every four-card combination and collect their labels.
pub fn census() -> Census {
    let mut labels = BTreeSet::new();
    for_each_hand(|hand| {
        labels.insert(hand.label());
    });
    Census { labels }
}

/// Call `f` once per four-card combination of a full deck.
fn for_each_hand(mut f: impl FnMut(Hand)) {
    let deck: Vec<Card> = Rank::all()
        .into_iter()
        .flat_map(|rank| Suit::all().into_iter().map(move |suit| Card::new(rank, suit)))
        .collect();

    let n = deck.len();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    f(Hand::new([deck[a], deck[b], deck[c], deck[d]]));
                }
            }
        }
    }
}
