//! Card types and their game-specific ordering.
//!
//! Cards compare by suit first and by rank second, so any spade beats any
//! heart regardless of rank. Aces are high.

use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card suit, ordered `Club < Diamond < Heart < Spade`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Diamond, Self::Heart, Self::Spade];

    /// Returns the ordering value of the suit (1 = Club, 4 = Spade).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Club => 1,
            Self::Diamond => 2,
            Self::Heart => 3,
            Self::Spade => 4,
        }
    }

    /// Returns the canonical name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Club => "CLUB",
            Self::Diamond => "DIAMOND",
            Self::Heart => "HEART",
            Self::Spade => "SPADE",
        }
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// Card rank, ordered `Two < Three < ... < King < Ace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace (high).
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
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

    /// Returns the ordering value of the rank (2 = Two, 14 = Ace).
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten => 10,
            Self::Jack => 11,
            Self::Queen => 12,
            Self::King => 13,
            Self::Ace => 14,
        }
    }

    /// Returns the canonical name of the rank.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Four => "FOUR",
            Self::Five => "FIVE",
            Self::Six => "SIX",
            Self::Seven => "SEVEN",
            Self::Eight => "EIGHT",
            Self::Nine => "NINE",
            Self::Ten => "TEN",
            Self::Jack => "JACK",
            Self::Queen => "QUEEN",
            Self::King => "KING",
            Self::Ace => "ACE",
        }
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.name().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// A playing card.
///
/// Cards are plain values: equality is structural and a card never changes
/// after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.suit
            .cmp(&other.suit)
            .then_with(|| self.rank.cmp(&other.rank))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Renders as `<RANK>-<SUIT>`, e.g. `ACE-SPADE`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s
            .trim()
            .split_once('-')
            .ok_or(ParseCardError::MissingSeparator)?;
        Ok(Self::new(suit.parse()?, rank.parse()?))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

const _: () = assert!(Suit::ALL.len() * Rank::ALL.len() == DECK_SIZE);
const _: () = assert!(suits_distinct() && ranks_distinct());

/// Returns whether every entry of [`Suit::ALL`] has its own value.
const fn suits_distinct() -> bool {
    let mut i = 0;
    while i < Suit::ALL.len() {
        let mut j = i + 1;
        while j < Suit::ALL.len() {
            if Suit::ALL[i].value() == Suit::ALL[j].value() {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Returns whether every entry of [`Rank::ALL`] has its own value.
const fn ranks_distinct() -> bool {
    let mut i = 0;
    while i < Rank::ALL.len() {
        let mut j = i + 1;
        while j < Rank::ALL.len() {
            if Rank::ALL[i].value() == Rank::ALL[j].value() {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}
