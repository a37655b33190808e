//! Card types and card-spec parsing.
//!
//! A [`Card`] is compared by rank only: `AS == AD` and `AS > KS`. Every card
//! also carries a [`CardId`] so that decks and hands can tell two cards of the
//! same rank apart when asking "is this exact card here".

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;
use core::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Card suit.
///
/// Suits carry no ordering weight; they only matter for flushes and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Returns the spec token of the suit (`S`, `H`, `D` or `C`).
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
        }
    }

    const fn from_token(token: char) -> Option<Self> {
        match token {
            'S' => Some(Self::Spades),
            'H' => Some(Self::Hearts),
            'D' => Some(Self::Diamonds),
            'C' => Some(Self::Clubs),
            _ => None,
        }
    }

    /// First code point of the suit's row in the Unicode playing cards block.
    const fn glyph_base(self) -> u32 {
        match self {
            Self::Spades => 0x1F0A1,
            Self::Hearts => 0x1F0B1,
            Self::Diamonds => 0x1F0C1,
            Self::Clubs => 0x1F0D1,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Card rank, `Two` (score 0) through `Ace` (score 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// 10
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the ordinal score of the rank (0 for `Two` up to 12 for `Ace`).
    #[must_use]
    pub const fn score(self) -> u8 {
        self as u8
    }

    /// Returns the rank with the given score, or `None` if it is above 12.
    #[must_use]
    pub const fn from_score(score: u8) -> Option<Self> {
        if (score as usize) < Self::ALL.len() {
            Some(Self::ALL[score as usize])
        } else {
            None
        }
    }

    /// Returns the spec token of the rank (`2`..`10`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Offset from the ace in the Unicode playing cards block. The knight
    /// sits between jack and queen and is skipped.
    fn glyph_offset(self) -> u32 {
        match self {
            Self::Ace => 0,
            Self::Queen => 12,
            Self::King => 13,
            other => u32::from(other.score()) + 1,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Identity token of a physical card.
///
/// Two cards with the same rank (or even the same rank and suit) are distinct
/// cards unless they share a `CardId`. Copies of a [`Card`] share its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(u64);

impl CardId {
    /// Returns the raw id. Ids are handed out in creation order.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }
}

/// A playing card.
///
/// Equality, ordering and hashing look at the rank only; use [`Card::is`] to
/// check whether two values are the same physical card.
///
/// ```
/// use pokerhand::Card;
///
/// let ace_spades: Card = "AS".parse().unwrap();
/// let ace_diamonds: Card = "AD".parse().unwrap();
/// let king_spades: Card = "KS".parse().unwrap();
///
/// assert_eq!(ace_spades, ace_diamonds);
/// assert!(ace_spades > king_spades);
/// assert!(!ace_spades.is(&ace_diamonds));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    id: CardId,
}

impl Card {
    /// Creates a new physical card with a fresh identity.
    #[must_use]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            id: CardId::next(),
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the ordinal score of the card's rank (0..=12).
    #[must_use]
    pub const fn score(&self) -> u8 {
        self.rank.score()
    }

    /// Returns the identity token of the card.
    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    /// Returns whether `other` is this exact card rather than merely an equal one.
    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Returns the Unicode playing-card character for the card, e.g. `🂡` for
    /// the ace of spades.
    #[must_use]
    pub fn glyph(&self) -> char {
        char::from_u32(self.suit.glyph_base() + self.rank.glyph_offset())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses `<rank><optional whitespace><suit>`, e.g. `"10H"`, `"10 H"` or `"QS"`.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (rank, rest) = if let Some(rest) = spec.strip_prefix("10") {
            (Rank::Ten, rest)
        } else {
            let mut chars = spec.chars();
            let rank = match chars.next() {
                Some(c @ '2'..='9') => Rank::from_score(c as u8 - b'2'),
                Some('J') => Some(Rank::Jack),
                Some('Q') => Some(Rank::Queen),
                Some('K') => Some(Rank::King),
                Some('A') => Some(Rank::Ace),
                _ => None,
            };
            (rank.ok_or(CardError::InvalidCardSpec)?, chars.as_str())
        };

        let mut chars = rest.trim_start().chars();
        let suit = match (chars.next(), chars.next()) {
            (Some(token), None) => Suit::from_token(token),
            _ => None,
        };

        suit.map(|suit| Self::new(rank, suit))
            .ok_or(CardError::InvalidCardSpec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_rank_and_suit() {
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let spec = alloc::format!("{}{}", rank.token(), suit.token());
                let card: Card = spec.parse().unwrap();
                assert_eq!(card.rank(), rank);
                assert_eq!(card.suit(), suit);
                assert_eq!(alloc::format!("{card}"), spec);
            }
        }
    }

    #[test]
    fn whitespace_between_rank_and_suit_is_allowed() {
        let card: Card = "10 \tH".parse().unwrap();
        assert_eq!(card.rank(), Rank::Ten);
        assert_eq!(card.suit(), Suit::Hearts);
    }

    #[test]
    fn rejects_malformed_specs() {
        for spec in [
            "", "A", "S", "1S", "11S", "0S", "as", "Ah", "AX", "ASS", " AS", "AS ", "1 0S", "T S",
        ] {
            assert_eq!(spec.parse::<Card>(), Err(CardError::InvalidCardSpec), "{spec:?}");
        }
    }

    #[test]
    fn scores_run_from_two_to_ace() {
        assert_eq!(Rank::Two.score(), 0);
        assert_eq!(Rank::Ace.score(), 12);
        assert_eq!(Rank::from_score(8), Some(Rank::Ten));
        assert_eq!(Rank::from_score(13), None);
    }

    #[test]
    fn glyphs_skip_the_knight() {
        let glyph = |spec: &str| spec.parse::<Card>().unwrap().glyph();
        assert_eq!(glyph("AS"), '\u{1F0A1}');
        assert_eq!(glyph("2H"), '\u{1F0B2}');
        assert_eq!(glyph("10D"), '\u{1F0CA}');
        assert_eq!(glyph("JD"), '\u{1F0CB}');
        assert_eq!(glyph("QC"), '\u{1F0DD}');
        assert_eq!(glyph("KS"), '\u{1F0AE}');
    }

    #[test]
    fn copies_keep_identity_new_cards_do_not() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        let copy = card;
        let twin = Card::new(Rank::Ace, Suit::Spades);
        assert!(card.is(&copy));
        assert!(!card.is(&twin));
        assert!(twin.id().get() > card.id().get());
        assert_eq!(card, twin);
    }
}
