//! Error types for card, hand and deck operations.

use thiserror::Error;

/// Errors that can occur while parsing a card spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The text is not `<rank><optional whitespace><suit>`.
    #[error("invalid card spec")]
    InvalidCardSpec,
}

/// Errors that can occur while parsing a category name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// The text is not one of the ten category names.
    #[error("unknown hand category")]
    UnknownCategory,
}

/// Errors that can occur when taking cards from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the draw pile.
    #[error("cannot draw from empty deck")]
    EmptyDeck,
    /// Fewer cards left in the draw pile than requested.
    #[error("insufficient cards left to deal: requested {requested}, remaining {remaining}")]
    InsufficientCards {
        /// Number of cards asked for.
        requested: usize,
        /// Number of cards left in the draw pile.
        remaining: usize,
    },
}

/// Errors that can occur while building a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// One of the card specs is malformed.
    #[error("invalid card spec")]
    InvalidCardSpec,
    /// The hand does not consist of exactly five cards.
    #[error("hand must consist of 5 cards, got {0}")]
    InvalidHandSize(usize),
    /// The deck could not supply the cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

impl From<CardError> for HandError {
    fn from(err: CardError) -> Self {
        match err {
            CardError::InvalidCardSpec => Self::InvalidCardSpec,
        }
    }
}
