//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Waiting for cards to be dealt.
    Dealing,
    /// Cards are dealt and hidden; waiting for the guess.
    Guessing,
    /// The guess was evaluated and the hand can be shown.
    Revealed,
}

/// Result of evaluating a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    /// The guessed hand position.
    pub index: usize,
    /// Whether the guessed card was the highest.
    pub correct: bool,
}
