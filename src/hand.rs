//! Player hand representation.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// An ordered, immutable sequence of cards.
///
/// [`Hand::add`] and [`Hand::remove`] return a new hand and leave the
/// receiver untouched, so earlier snapshots stay valid. Order is dealing
/// order; index 0 is the first card dealt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Returns a new hand with `card` appended.
    #[must_use]
    pub fn add(&self, card: Card) -> Self {
        let mut cards = Vec::with_capacity(self.cards.len() + 1);
        cards.extend_from_slice(&self.cards);
        cards.push(card);
        Self { cards }
    }

    /// Returns a new hand without the first card equal to `card`.
    ///
    /// If the card is not held the result equals `self`.
    #[must_use]
    pub fn remove(&self, card: &Card) -> Self {
        let mut cards = self.cards.clone();
        if let Some(position) = cards.iter().position(|held| held == card) {
            cards.remove(position);
        }
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the card at `index` is strictly greater than every
    /// other card in the hand, or `None` if `index` is out of range.
    ///
    /// Other cards are skipped by position, so a duplicate of the guessed
    /// card elsewhere in the hand makes the result `false`.
    #[must_use]
    pub fn is_strict_max(&self, index: usize) -> Option<bool> {
        let guessed = self.cards.get(index)?;
        Some(
            self.cards
                .iter()
                .enumerate()
                .filter(|&(position, _)| position != index)
                .all(|(_, card)| guessed > card),
        )
    }

    /// Returns the position of the unique highest card.
    ///
    /// Returns `None` for an empty hand or when the highest card is held twice.
    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        (0..self.cards.len()).find(|&index| self.is_strict_max(index) == Some(true))
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Cards separated by spaces, e.g. `TWO-CLUB ACE-SPADE`.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
