//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The deck has no cards left.
    #[error("deck exhausted")]
    Exhausted,
    /// The requested position is outside the remaining cards.
    #[error("draw index {index} out of range for deck of {len} cards")]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Number of cards remaining.
        len: usize,
    },
}

/// Errors that can occur when building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The card set is not exactly one of every suit and rank pair.
    #[error("malformed deck: {len} cards, {unique} unique")]
    Malformed {
        /// Number of cards supplied.
        len: usize,
        /// Number of distinct cards supplied.
        unique: usize,
    },
}

/// Errors that can occur when evaluating a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    /// The guessed position is outside the hand.
    #[error("guess index {index} out of range for hand of {len} cards")]
    OutOfRange {
        /// The guessed index.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
}

/// Errors that can occur when creating a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The name is empty or whitespace only.
    #[error("player name is empty")]
    EmptyName,
}

/// Errors that can occur when parsing a card, rank, or suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// No `-` between rank and suit.
    #[error("expected <RANK>-<SUIT>")]
    MissingSeparator,
    /// Unrecognised rank name.
    #[error("unknown rank")]
    UnknownRank,
    /// Unrecognised suit name.
    #[error("unknown suit")]
    UnknownSuit,
}

/// Errors that can occur when parsing a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseGuessError {
    /// Nothing was entered.
    #[error("no guess entered")]
    Empty,
    /// Anything other than `first` or `second`.
    #[error("invalid choice")]
    Invalid,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid round state for this operation.
    #[error("invalid round state for this operation")]
    InvalidState,
    /// Dealing failed.
    #[error(transparent)]
    Draw(#[from] DrawError),
    /// The guess could not be evaluated.
    #[error(transparent)]
    Guess(#[from] GuessError),
}
