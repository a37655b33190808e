//! Playing cards, five-card poker hands and a 52-card deck, with optional
//! `no_std` support.
//!
//! The crate parses card and hand notation (`"10H"`, `"AS 2D 4C 7H KS"`),
//! classifies hands into the ten standard categories, orders hands so a
//! winner can be picked, and runs a deck with draw, discard, reshuffle and
//! card exchange. Betting, turn order and rendering are left to the host.
//!
//! Cards and hands compare by rank only; suits never break ties. Decks and
//! hands track cards by identity, so two cards of the same rank are never
//! confused when checking where a card is.
//!
//! # Example
//!
//! ```
//! use pokerhand::{Category, Deck, Hand};
//!
//! let mut deck = Deck::new(42);
//! let mut hand = Hand::deal(&mut deck).unwrap();
//! assert_eq!(deck.len(), 47);
//!
//! // Swap the two lowest cards.
//! let low = [hand[0], hand[1]];
//! hand.exchange(&mut deck, &low).unwrap();
//! assert_eq!(deck.discarded(), 2);
//!
//! let other: Hand = "AS AC AD AH 5S".parse().unwrap();
//! assert_eq!(other.category(), Category::FourOfAKind);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, Rank, Suit};
pub use category::Category;
pub use deck::Deck;
pub use error::{CardError, CategoryError, DeckError, HandError};
pub use hand::{HAND_SIZE, Hand};
pub use options::{ExchangeMode, HandOptions};
pub use shared::SharedDeck;
