//! Parsing of the player's textual guess.

use core::str::FromStr;

use crate::error::ParseGuessError;

/// Which of two dealt cards the player claims is higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guess {
    /// The first card dealt.
    First,
    /// The second card dealt.
    Second,
}

impl Guess {
    /// Returns the hand position the guess refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Accepts `first` or `second` in any case.
impl FromStr for Guess {
    type Err = ParseGuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            Err(ParseGuessError::Empty)
        } else if s.eq_ignore_ascii_case("first") {
            Ok(Self::First)
        } else if s.eq_ignore_ascii_case("second") {
            Ok(Self::Second)
        } else {
            Err(ParseGuessError::Invalid)
        }
    }
}
