//! Round configuration options.

/// Configuration options for a guessing round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use higher_card::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_cards_dealt(3)
///     .with_shuffle_before_deal(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Number of cards dealt to the player.
    pub cards_dealt: usize,
    /// Whether the deck is shuffled before dealing.
    ///
    /// Dealing already picks cards at random; shuffling only changes which
    /// random draws the seed produces.
    pub shuffle_before_deal: bool,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            cards_dealt: 2,
            shuffle_before_deal: false,
        }
    }
}

impl RoundOptions {
    /// Sets the number of cards dealt.
    ///
    /// # Example
    ///
    /// ```
    /// use higher_card::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_cards_dealt(4);
    /// assert_eq!(options.cards_dealt, 4);
    /// ```
    #[must_use]
    pub const fn with_cards_dealt(mut self, cards: usize) -> Self {
        self.cards_dealt = cards;
        self
    }

    /// Sets whether the deck is shuffled before dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use higher_card::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_shuffle_before_deal(true);
    /// assert_eq!(options.shuffle_before_deal, true);
    /// ```
    #[must_use]
    pub const fn with_shuffle_before_deal(mut self, shuffle: bool) -> Self {
        self.shuffle_before_deal = shuffle;
        self
    }
}
