//! The hero's four hole cards.

use std::fmt;

use super::{Card, CardError, Label};

/// Exactly four cards, kept in the order they were dealt.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Hand([Card; 4]);

impl Hand {
    pub fn new(cards: [Card; 4]) -> Self {
        Self(cards)
    }

    pub fn cards(&self) -> &[Card; 4] {
        &self.0
    }

    /// Canonical shape of this hand.
    pub fn label(&self) -> Label {
        Label::of(self)
    }

    /// Cards in dealt order with canonical case, concatenated, e.g. `AhKdQhJs`.
    pub fn exact(&self) -> String {
        self.to_string()
    }

    /// Parse whitespace-separated card tokens, e.g. `"Ah Kd Qh Js"`.
    pub fn parse_tokens(tokens: &str) -> Result<Self, CardError> {
        let cards = tokens
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::try_from(cards)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = CardError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        let len = cards.len();
        let cards: [Card; 4] = cards.try_into().map_err(|_| CardError::WrongArity(len))?;
        Ok(Self(cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.0 {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tokens_keeps_dealt_order() {
        let hand = Hand::parse_tokens("7c Ah 2d Kd").unwrap();
        assert_eq!(hand.exact(), "7cAh2dKd");
    }

    #[test]
    fn parse_tokens_rejects_wrong_arity() {
        assert_eq!(
            Hand::parse_tokens("Ah Kd Qh Js Tc"),
            Err(CardError::WrongArity(5))
        );
        assert_eq!(Hand::parse_tokens("Ah Kd"), Err(CardError::WrongArity(2)));
        assert_eq!(Hand::parse_tokens(""), Err(CardError::WrongArity(0)));
    }

    #[test]
    fn parse_tokens_reports_bad_cards_first() {
        assert_eq!(
            Hand::parse_tokens("Ah Kd Qx Js"),
            Err(CardError::InvalidSuit('x'))
        );
    }
}
