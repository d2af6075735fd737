//! Players and the guess rule.

use alloc::string::String;
use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::card::Card;
use crate::error::{GuessError, PlayerError};
use crate::hand::Hand;

/// Next player ID to assign.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque player identifier, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u64);

impl PlayerId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// A player holding a hand of cards.
#[derive(Debug, Clone)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Hand,
}

impl Player {
    /// Creates a player with an empty hand and a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptyName`] if `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, PlayerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlayerError::EmptyName);
        }

        Ok(Self {
            id: PlayerId::next(),
            name,
            hand: Hand::empty(),
        })
    }

    /// Returns the player's ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's current hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a card to the end of the hand.
    pub fn receive(&mut self, card: Card) {
        self.hand = self.hand.add(card);
        trace!(player = %self.id, %card, cards = self.hand.len(), "card received");
    }

    /// Removes the first matching card from the hand, if held.
    pub fn discard(&mut self, card: &Card) {
        self.hand = self.hand.remove(card);
        trace!(player = %self.id, %card, cards = self.hand.len(), "card discarded");
    }

    /// Returns whether the card at `index` beats every other card in the hand.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::OutOfRange`] if `index` is not a hand position.
    pub fn guess(&self, index: usize) -> Result<bool, GuessError> {
        self.hand
            .is_strict_max(index)
            .ok_or(GuessError::OutOfRange {
                index,
                len: self.hand.len(),
            })
    }
}
