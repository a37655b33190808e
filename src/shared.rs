//! A deck behind a single exclusive lock.
//!
//! Draws, discards and reshuffles must not interleave, so a deck shared by
//! several actors (one deck per table) goes through one [`Mutex`].

use alloc::vec::Vec;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{DeckError, HandError};
use crate::hand::Hand;
use crate::options::HandOptions;
use crate::sync::Mutex;

/// A [`Deck`] that can be shared between threads.
///
/// ```
/// use pokerhand::SharedDeck;
///
/// let deck = SharedDeck::new(7);
/// let hand = deck.deal_hand().unwrap();
/// assert_eq!(deck.len(), 47);
/// let _ = hand;
/// ```
pub struct SharedDeck<R = ChaCha8Rng> {
    deck: Mutex<Deck<R>>,
}

impl SharedDeck<ChaCha8Rng> {
    /// Creates a shared, shuffled deck seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_deck(Deck::new(seed))
    }
}

impl<R: Rng> SharedDeck<R> {
    /// Wraps an existing deck.
    pub const fn from_deck(deck: Deck<R>) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Unwraps the deck.
    #[must_use]
    pub fn into_inner(self) -> Deck<R> {
        self.deck.into_inner()
    }

    /// Runs `f` with exclusive access to the deck.
    ///
    /// Use this for compound operations that must not be split by other
    /// callers, e.g. discarding several cards and reshuffling.
    pub fn with<T>(&self, f: impl FnOnce(&mut Deck<R>) -> T) -> T {
        f(&mut self.deck.lock())
    }

    /// See [`Deck::draw`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the draw pile is empty.
    pub fn draw(&self) -> Result<Card, DeckError> {
        self.with(Deck::draw)
    }

    /// See [`Deck::deal`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `n` cards remain.
    pub fn deal(&self, n: usize) -> Result<Vec<Card>, DeckError> {
        self.with(|deck| deck.deal(n))
    }

    /// Deals a five-card hand.
    ///
    /// # Errors
    ///
    /// See [`Hand::deal`].
    pub fn deal_hand(&self) -> Result<Hand, HandError> {
        self.with(Hand::deal)
    }

    /// See [`Deck::discard`].
    ///
    /// # Panics
    ///
    /// Panics if this exact card is already in the deck.
    pub fn discard(&self, card: Card) {
        self.with(|deck| deck.discard(card));
    }

    /// See [`Deck::reshuffle`].
    pub fn reshuffle(&self) {
        self.with(Deck::reshuffle);
    }

    /// Exchanges cards of `hand` while holding the lock for the whole exchange.
    ///
    /// # Errors
    ///
    /// See [`Hand::exchange_with`].
    ///
    /// # Panics
    ///
    /// Panics if a named card is not held by `hand`.
    pub fn exchange(
        &self,
        hand: &mut Hand,
        cards: &[Card],
        options: &HandOptions,
    ) -> Result<(), DeckError> {
        self.with(|deck| hand.exchange_with(deck, cards, options))
    }

    /// Returns the number of cards in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns whether the draw pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.lock().is_empty()
    }

    /// Returns the number of cards in the draw and discard piles together.
    #[must_use]
    pub fn total(&self) -> usize {
        self.deck.lock().total()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    use alloc::sync::Arc;
    use std::thread;

    #[test]
    fn concurrent_deals_never_share_a_card() {
        let deck = Arc::new(SharedDeck::new(11));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let deck = Arc::clone(&deck);
                thread::spawn(move || {
                    (0..2)
                        .map(|_| deck.deal_hand().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let dealt: Vec<Card> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .flat_map(|hand| hand.cards().to_vec())
            .collect();

        assert_eq!(dealt.len(), 40);
        assert_eq!(deck.len(), 12);
        for (index, card) in dealt.iter().enumerate() {
            assert!(!dealt[index + 1..].iter().any(|other| other.is(card)));
            assert!(!deck.with(|deck| deck.contains(card)));
        }
    }

    #[test]
    fn discard_and_reshuffle_conserve_cards() {
        let deck = SharedDeck::new(2);
        let cards = deck.deal(10).unwrap();
        for card in cards {
            deck.discard(card);
        }
        assert_eq!(deck.total(), 52);
        deck.reshuffle();
        assert_eq!(deck.len(), 52);
        assert!(!deck.is_empty());

        let deck = deck.into_inner();
        assert_eq!(deck.discarded(), 0);
    }
}
