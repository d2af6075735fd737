//! A card-comparison guessing game engine with optional `no_std` support.
//!
//! Two cards are dealt from a standard 52-card deck and the player guesses
//! which one is higher. Cards order by suit first
//! (`Club < Diamond < Heart < Spade`) and by rank second, aces high.
//!
//! The crate provides the card model ([`Card`], [`Deck`], [`Hand`],
//! [`Player`]) and a [`Round`] type that sequences deal, guess, and reveal.
//!
//! # Example
//!
//! ```
//! use higher_card::{Guess, Round, RoundOptions};
//!
//! let mut round = Round::new("Ada", RoundOptions::default(), 42).unwrap();
//! round.deal().unwrap();
//!
//! let guess: Guess = "first".parse().unwrap();
//! let outcome = round.guess(guess.index()).unwrap();
//! let _ = outcome.correct;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod guess;
pub mod hand;
pub mod options;
pub mod player;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    DeckError, DrawError, GuessError, ParseCardError, ParseGuessError, PlayerError, RoundError,
};
pub use guess::Guess;
pub use hand::Hand;
pub use options::RoundOptions;
pub use player::{Player, PlayerId};
pub use round::{GuessOutcome, Round, RoundState};
