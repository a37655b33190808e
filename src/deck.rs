//! The 52-card deck: a draw pile, a discard pile and the RNG that shuffles them.

use core::fmt;

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A standard 52-card deck.
///
/// Every card created by [`Deck::new`] is at any time in exactly one place:
/// the draw pile, the discard pile, or held by the caller (usually a
/// [`Hand`](crate::Hand)). Membership checks compare card identity, not rank.
///
/// The deck owns its random source. Seeded decks shuffle deterministically.
///
/// ```
/// use pokerhand::Deck;
///
/// let mut deck = Deck::new(42);
/// let card = deck.draw().unwrap();
/// assert_eq!(deck.len(), 51);
///
/// deck.discard(card);
/// deck.reshuffle();
/// assert_eq!(deck.len(), 52);
/// ```
pub struct Deck<R = ChaCha8Rng> {
    /// Draw pile; the top card is the last element.
    cards: Vec<Card>,
    /// Discard pile, unordered.
    discard: Vec<Card>,
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates a shuffled deck seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Deck<R> {
    /// Creates a deck shuffled with the given random source.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        let mut deck = Self::stacked(cards, rng);
        deck.shuffle();
        log::debug!("created deck with {} cards", deck.len());
        deck
    }

    /// Creates a deck whose draw pile is `cards` in the given order, without
    /// shuffling. The last card is drawn first.
    ///
    /// The caller is responsible for the cards being distinct; the usual use is
    /// arranging a known order for a demo or a test.
    #[must_use]
    pub const fn stacked(cards: Vec<Card>, rng: R) -> Self {
        Self {
            cards,
            discard: Vec::new(),
            rng,
        }
    }

    /// Shuffles the draw pile in place. The discard pile is untouched.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card of the draw pile.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if the draw pile is empty.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::EmptyDeck)?;
        log::trace!("drew {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Draws `n` cards, returned in the order they were drawn.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `n` cards remain.
    /// Nothing is drawn in that case.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if remaining < n {
            return Err(DeckError::InsufficientCards {
                requested: n,
                remaining,
            });
        }

        let dealt: Vec<Card> = self.cards.drain(remaining - n..).rev().collect();
        log::debug!("dealt {n} cards, {} left", self.cards.len());
        Ok(dealt)
    }

    /// Puts `card` on the discard pile.
    ///
    /// # Panics
    ///
    /// Panics if this exact card is still in the draw pile or already in the
    /// discard pile. Another card of the same rank is fine.
    pub fn discard(&mut self, card: Card) {
        assert!(
            !self.contains(&card),
            "cannot discard {card}: it is still in the draw pile"
        );
        assert!(
            !self.is_discarded(&card),
            "cannot discard {card}: it is already discarded"
        );
        log::trace!("discarded {card}");
        self.discard.push(card);
    }

    /// Moves every discarded card back to the draw pile and shuffles it.
    pub fn reshuffle(&mut self) {
        let returned = self.discard.len();
        self.cards.append(&mut self.discard);
        self.shuffle();
        log::debug!(
            "reshuffled {returned} discarded cards, {} in draw pile",
            self.cards.len()
        );
    }
}

impl<R> Deck<R> {
    /// Returns whether this exact card is in the draw pile.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c.is(card))
    }

    /// Returns whether this exact card is in the discard pile.
    #[must_use]
    pub fn is_discarded(&self, card: &Card) -> bool {
        self.discard.iter().any(|c| c.is(card))
    }

    /// Returns the number of cards in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the draw pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards in the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discard.len()
    }

    /// Returns the number of cards in the draw and discard piles together.
    #[must_use]
    pub fn total(&self) -> usize {
        self.cards.len() + self.discard.len()
    }

    /// Returns the draw pile, bottom card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }
}

impl<R> fmt::Debug for Deck<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("cards", &self.cards.len())
            .field("discard", &self.discard.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_returns_cards_in_draw_order() {
        let cards: Vec<Card> = ["2S", "3S", "4S"]
            .iter()
            .map(|spec| spec.parse().unwrap())
            .collect();
        let mut deck = Deck::stacked(cards.clone(), ChaCha8Rng::seed_from_u64(0));

        let dealt = deck.deal(2).unwrap();
        assert!(dealt[0].is(&cards[2]));
        assert!(dealt[1].is(&cards[1]));
        assert!(deck.cards()[0].is(&cards[0]));
    }

    #[test]
    fn failed_deal_leaves_deck_untouched() {
        let mut deck = Deck::new(5);
        deck.deal(50).unwrap();
        assert_eq!(
            deck.deal(3),
            Err(DeckError::InsufficientCards {
                requested: 3,
                remaining: 2
            })
        );
        assert_eq!(deck.len(), 2);
    }

    #[test]
    #[should_panic(expected = "still in the draw pile")]
    fn discarding_a_card_in_the_draw_pile_panics() {
        let mut deck = Deck::new(1);
        let top = *deck.cards().last().unwrap();
        deck.discard(top);
    }

    #[test]
    #[should_panic(expected = "already discarded")]
    fn discarding_twice_panics() {
        let mut deck = Deck::new(1);
        let card = deck.draw().unwrap();
        deck.discard(card);
        deck.discard(card);
    }

    #[test]
    fn discarding_an_equal_rank_card_is_identity_checked() {
        let mut deck = Deck::new(9);
        let top = *deck.cards().last().unwrap();
        // Same rank and suit, different physical card.
        let lookalike = Card::new(top.rank(), top.suit());
        assert!(!deck.contains(&lookalike));
        deck.discard(lookalike);
        assert_eq!(deck.discarded(), 1);
    }

    #[test]
    fn debug_shows_pile_sizes() {
        let mut deck = Deck::new(3);
        let card = deck.draw().unwrap();
        deck.discard(card);
        assert_eq!(
            alloc::format!("{deck:?}"),
            "Deck { cards: 51, discard: 1, .. }"
        );
    }
}
