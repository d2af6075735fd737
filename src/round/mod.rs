//! Round engine: deal, guess, reveal.

use alloc::string::String;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::error::{DrawError, PlayerError, RoundError};
use crate::hand::Hand;
use crate::options::RoundOptions;
use crate::player::Player;

pub mod state;

pub use state::{GuessOutcome, RoundState};

/// A single guessing round.
///
/// The round owns its deck and player; nothing is shared between rounds.
/// Play proceeds [`deal`](Round::deal), then [`guess`](Round::guess), after
/// which [`revealed`](Round::revealed) exposes the hand.
#[derive(Debug)]
pub struct Round<R = ChaCha8Rng> {
    /// Cards not yet dealt.
    deck: Deck<R>,
    /// The guessing player.
    player: Player,
    /// Round options.
    options: RoundOptions,
    /// Current round state.
    state: RoundState,
}

impl Round<ChaCha8Rng> {
    /// Creates a new round with a fresh deck seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptyName`] if `name` is blank.
    ///
    /// # Example
    ///
    /// ```
    /// use higher_card::{Round, RoundOptions};
    ///
    /// let mut round = Round::new("Ada", RoundOptions::default(), 42).unwrap();
    /// round.deal().unwrap();
    /// let outcome = round.guess(0).unwrap();
    /// assert_eq!(round.revealed().map(|hand| hand.len()), Some(2));
    /// let _ = outcome.correct;
    /// ```
    pub fn new(
        name: impl Into<String>,
        options: RoundOptions,
        seed: u64,
    ) -> Result<Self, PlayerError> {
        Self::with_deck(name, options, Deck::new(seed))
    }
}

impl<R: Rng> Round<R> {
    /// Creates a new round dealing from the given deck.
    ///
    /// # Errors
    ///
    /// Returns [`PlayerError::EmptyName`] if `name` is blank.
    pub fn with_deck(
        name: impl Into<String>,
        options: RoundOptions,
        deck: Deck<R>,
    ) -> Result<Self, PlayerError> {
        let player = Player::new(name)?;
        debug!(player = %player.id(), name = player.name(), "round created");

        Ok(Self {
            deck,
            player,
            options,
            state: RoundState::Dealing,
        })
    }

    /// Deals the configured number of cards to the player, in dealing order.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if cards were already dealt and
    /// [`RoundError::Draw`] if the deck cannot cover the whole deal. No card
    /// is dealt when an error is returned.
    pub fn deal(&mut self) -> Result<(), RoundError> {
        if self.state != RoundState::Dealing {
            return Err(RoundError::InvalidState);
        }
        if self.deck.len() < self.options.cards_dealt {
            return Err(DrawError::Exhausted.into());
        }

        if self.options.shuffle_before_deal {
            self.deck.shuffle();
        }
        for _ in 0..self.options.cards_dealt {
            let card = self.deck.draw_random()?;
            self.player.receive(card);
        }

        self.state = RoundState::Guessing;
        debug!(player = %self.player.id(), hand = %self.player.hand(), "cards dealt");
        Ok(())
    }

    /// Evaluates the player's guess that the card at `index` is the highest.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] unless cards are dealt and no
    /// guess was made yet, and [`RoundError::Guess`] if `index` is not a
    /// hand position. The round stays in the guessing state on error.
    pub fn guess(&mut self, index: usize) -> Result<GuessOutcome, RoundError> {
        if self.state != RoundState::Guessing {
            return Err(RoundError::InvalidState);
        }

        let correct = self.player.guess(index)?;
        self.state = RoundState::Revealed;
        debug!(player = %self.player.id(), index, correct, "guess evaluated");

        Ok(GuessOutcome { index, correct })
    }

    /// Returns the player's hand once the guess has been made.
    #[must_use]
    pub fn revealed(&self) -> Option<&Hand> {
        (self.state == RoundState::Revealed).then(|| self.player.hand())
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck<R> {
        &self.deck
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }
}
