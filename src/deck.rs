//! A single 52-card deck with removal-based drawing.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, DrawError};

/// A deck of unique cards.
///
/// Every draw removes its card, so a deck never holds duplicates and shrinks
/// by exactly one card per successful draw. The random source is only used
/// by [`Deck::shuffle`] and [`Deck::draw_random`].
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    /// Remaining cards.
    cards: Vec<Card>,
    /// Random number generator.
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates a full deck driven by a seeded `ChaCha8Rng`.
    ///
    /// # Example
    ///
    /// ```
    /// use higher_card::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Deck<R> {
    /// Creates a full deck using the given random source.
    ///
    /// Cards are ordered suit by suit (clubs first), two through ace.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        let cards = full_deck();
        assert!(is_full_deck(&cards), "suit or rank enumeration is malformed");

        Self { cards, rng }
    }

    /// Creates a deck from an explicit card order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Malformed`] unless `cards` holds every suit and
    /// rank pair exactly once.
    pub fn from_cards(cards: Vec<Card>, rng: R) -> Result<Self, DeckError> {
        if !is_full_deck(&cards) {
            return Err(DeckError::Malformed {
                len: cards.len(),
                unique: count_unique(&cards),
            });
        }

        Ok(Self { cards, rng })
    }

    /// Returns the remaining cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the card is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Shuffles the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        debug!(remaining = self.cards.len(), "deck shuffled");
    }

    /// Removes and returns the card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Exhausted`] if the deck is empty and
    /// [`DrawError::OutOfRange`] if `index` is past the last card.
    pub fn draw_at(&mut self, index: usize) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::Exhausted);
        }
        if index >= self.cards.len() {
            return Err(DrawError::OutOfRange {
                index,
                len: self.cards.len(),
            });
        }

        let card = self.cards.remove(index);
        trace!(%card, index, remaining = self.cards.len(), "card drawn");
        Ok(card)
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Exhausted`] if the deck is empty.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.draw_at(0)
    }

    /// Removes and returns a card chosen uniformly from the remaining cards.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::Exhausted`] if the deck is empty.
    pub fn draw_random(&mut self) -> Result<Card, DrawError> {
        if self.cards.is_empty() {
            return Err(DrawError::Exhausted);
        }

        let index = self.rng.random_range(0..self.cards.len());
        self.draw_at(index)
    }
}

fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

fn count_unique(cards: &[Card]) -> usize {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.len()
}

fn is_full_deck(cards: &[Card]) -> bool {
    cards.len() == DECK_SIZE && count_unique(cards) == DECK_SIZE
}
