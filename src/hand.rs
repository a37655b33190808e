//! Five-card poker hands: classification, ordering and card exchange.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Index;
use core::slice;
use core::str::FromStr;

use alloc::vec::Vec;
use rand::Rng;

use crate::card::Card;
use crate::category::Category;
use crate::deck::Deck;
use crate::error::{DeckError, HandError};
use crate::options::{ExchangeMode, HandOptions};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Scores of A-2-3-4-5 once sorted, the ace counting low.
const WHEEL: [u8; HAND_SIZE] = [0, 1, 2, 3, 12];

/// Scores of 10-J-Q-K-A.
const BROADWAY: [u8; HAND_SIZE] = [8, 9, 10, 11, 12];

/// A five-card poker hand.
///
/// Cards are kept sorted ascending by rank. Hands are ordered by
/// [`Category`] first and then by rank from the highest card down; suits never
/// take part, so two hands with the same category and ranks are equal.
///
/// ```
/// use pokerhand::{Category, Hand};
///
/// let royal: Hand = "AS 10S JS QS KS".parse().unwrap();
/// let quads: Hand = "AS AC AD AH 5S".parse().unwrap();
///
/// assert_eq!(royal.category(), Category::RoyalFlush);
/// assert_eq!(quads.category().name(), "four of a kind");
/// assert!(royal > quads);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    /// Creates a hand from five cards.
    #[must_use]
    pub fn new(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort();
        Self { cards }
    }

    /// Creates a hand from any collection of cards.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidHandSize`] unless there are exactly five cards.
    pub fn from_cards<I>(cards: I) -> Result<Self, HandError>
    where
        I: IntoIterator<Item = Card>,
    {
        let cards: Vec<Card> = cards.into_iter().collect();
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|cards: Vec<Card>| HandError::InvalidHandSize(cards.len()))?;
        Ok(Self::new(cards))
    }

    /// Creates a hand from card specs such as `["AS", "10 H", "2C", "2D", "KH"]`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::InvalidCardSpec`] if any spec is malformed, then
    /// [`HandError::InvalidHandSize`] unless there are exactly five specs.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> Result<Self, HandError> {
        let cards = specs
            .iter()
            .map(|spec| spec.as_ref().parse::<Card>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cards(cards)
    }

    /// Deals a hand of five cards from `deck`.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Deck`] with [`DeckError::InsufficientCards`] if the
    /// draw pile holds fewer than five cards. The deck is left untouched.
    pub fn deal<R: Rng>(deck: &mut Deck<R>) -> Result<Self, HandError> {
        Self::from_cards(deck.deal(HAND_SIZE)?)
    }

    /// Returns the cards, lowest rank first.
    #[must_use]
    pub const fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards, lowest rank first.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the rank scores of the cards, ascending.
    #[must_use]
    pub fn scores(&self) -> [u8; HAND_SIZE] {
        self.cards.map(|card| card.score())
    }

    /// Returns whether this exact card is in the hand.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.position(card).is_some()
    }

    fn position(&self, card: &Card) -> Option<usize> {
        self.cards.iter().position(|c| c.is(card))
    }

    /// Classifies the hand.
    #[must_use]
    pub fn category(&self) -> Category {
        let scores = self.scores();
        let is_straight = scores == WHEEL || scores.windows(2).all(|w| w[1] == w[0] + 1);
        let suit = self.cards[0].suit();
        let is_flush = self.cards.iter().all(|card| card.suit() == suit);

        if is_flush {
            return if scores == BROADWAY {
                Category::RoyalFlush
            } else if is_straight {
                Category::StraightFlush
            } else {
                Category::Flush
            };
        }

        let mut runs = [0; HAND_SIZE];
        let mut groups = 0;
        for (run, group) in runs.iter_mut().zip(self.cards.chunk_by(|a, b| a == b)) {
            *run = group.len();
            groups += 1;
        }
        let runs = &mut runs[..groups];
        runs.sort_unstable();

        match runs {
            [1, 4] => Category::FourOfAKind,
            [2, 3] => Category::FullHouse,
            [1, 1, 3] => Category::ThreeOfAKind,
            [1, 2, 2] => Category::TwoPair,
            [1, 1, 1, 2] => Category::Pair,
            [1, 1, 1, 1, 1] if is_straight => Category::Straight,
            [1, 1, 1, 1, 1] => Category::HighCard,
            _ => unreachable!("five cards cannot group into runs {runs:?}"),
        }
    }

    /// Returns the ordinal of the hand's category (0 for high card up to 9).
    #[must_use]
    pub fn score(&self) -> u8 {
        self.category().score()
    }

    /// Replaces `cards` with fresh cards from `deck`, using the default
    /// [`HandOptions`].
    ///
    /// # Errors
    ///
    /// See [`Hand::exchange_with`].
    ///
    /// # Panics
    ///
    /// See [`Hand::exchange_with`].
    pub fn exchange<R: Rng>(
        &mut self,
        deck: &mut Deck<R>,
        cards: &[Card],
    ) -> Result<(), DeckError> {
        self.exchange_with(deck, cards, &HandOptions::default())
    }

    /// Replaces `cards` with fresh cards from `deck`.
    ///
    /// Each named card is swapped in turn: a replacement is drawn, the old
    /// card goes to the deck's discard pile, and the new one joins the hand.
    /// The hand is sorted again afterwards, also when an error is returned.
    ///
    /// # Errors
    ///
    /// With [`ExchangeMode::Sequential`], returns [`DeckError::EmptyDeck`] when
    /// the deck runs out; the cards swapped before that stay swapped. The card
    /// whose swap failed stays in the hand and is not discarded. With
    /// [`ExchangeMode::Atomic`], returns [`DeckError::InsufficientCards`] before
    /// changing anything if the deck cannot cover every replacement.
    ///
    /// # Panics
    ///
    /// Panics if a named card is not held by this hand (compared by identity)
    /// or is named twice. Both are checked before anything changes.
    pub fn exchange_with<R: Rng>(
        &mut self,
        deck: &mut Deck<R>,
        cards: &[Card],
        options: &HandOptions,
    ) -> Result<(), DeckError> {
        for (index, card) in cards.iter().enumerate() {
            assert!(self.contains(card), "cannot exchange {card}: not in hand");
            assert!(
                !cards[..index].iter().any(|c| c.is(card)),
                "cannot exchange {card}: named twice"
            );
        }

        if options.exchange == ExchangeMode::Atomic {
            if deck.len() < cards.len() {
                return Err(DeckError::InsufficientCards {
                    requested: cards.len(),
                    remaining: deck.len(),
                });
            }
        }

        let result = cards.iter().try_for_each(|card| self.replace(deck, card));
        self.cards.sort();

        match result {
            Ok(()) => log::debug!("exchanged {} cards: {}", cards.len(), self),
            Err(err) => log::debug!("exchange stopped early ({err}): {}", self),
        }
        result
    }

    fn replace<R: Rng>(&mut self, deck: &mut Deck<R>, card: &Card) -> Result<(), DeckError> {
        let Some(index) = self.position(card) else {
            unreachable!("{card} was checked to be in hand");
        };
        let replacement = deck.draw()?;
        deck.discard(self.cards[index]);
        self.cards[index..].rotate_left(1);
        self.cards[HAND_SIZE - 1] = replacement;
        Ok(())
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Hand {}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category()
            .cmp(&other.category())
            .then_with(|| self.cards.iter().rev().cmp(other.cards.iter().rev()))
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card} ")?;
        }
        write!(f, "\u{21D2} {}", self.category())
    }
}

impl FromStr for Hand {
    type Err = HandError;

    /// Parses whitespace-separated card specs, e.g. `"AS 2D 4C 7H KS"`.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let specs: Vec<&str> = spec.split_whitespace().collect();
        Self::from_specs(&specs)
    }
}
