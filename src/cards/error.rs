//! Card and label parsing errors.

/// Errors that can occur while parsing cards, hands, or labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CardError {
    #[error("Invalid rank: {0:?}")]
    InvalidRank(char),

    #[error("Invalid suit: {0:?}")]
    InvalidSuit(char),

    #[error("Card token must be rank followed by suit, got {0:?}")]
    InvalidToken(String),

    #[error("A hand needs exactly 4 cards, got {0}")]
    WrongArity(usize),

    #[error("Not a canonical label: {0:?}")]
    InvalidLabel(String),
}
