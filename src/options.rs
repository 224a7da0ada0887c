//! Game configuration options.

/// Configuration options for a game.
///
/// The defaults are the standard table constants. Use the builder pattern
/// to customize them:
///
/// ```
/// use ecrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_initial_chips(500)
///     .with_selection_time(30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Chip balance the player starts with.
    pub initial_chips: usize,
    /// Number of rounds after which the match ends.
    pub max_rounds: usize,
    /// Card-selection countdown, in timer ticks.
    pub selection_time: u32,
    /// Smallest bet a UI should offer (informational; zero is always legal).
    pub min_bet: usize,
    /// Largest bet the engine accepts.
    pub max_bet: usize,
    /// Mandatory stake both sides pay when the cards are drawn.
    pub ante: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            initial_chips: 300,
            max_rounds: 5,
            selection_time: 15,
            min_bet: 0,
            max_bet: 100,
            ante: 10,
        }
    }
}

impl GameOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use ecrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_chips(1000);
    /// assert_eq!(options.initial_chips, 1000);
    /// ```
    #[must_use]
    pub const fn with_initial_chips(mut self, chips: usize) -> Self {
        self.initial_chips = chips;
        self
    }

    /// Sets the number of rounds per match.
    ///
    /// # Example
    ///
    /// ```
    /// use ecrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(3);
    /// assert_eq!(options.max_rounds, 3);
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Sets the card-selection countdown.
    ///
    /// # Example
    ///
    /// ```
    /// use ecrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_selection_time(30);
    /// assert_eq!(options.selection_time, 30);
    /// ```
    #[must_use]
    pub const fn with_selection_time(mut self, ticks: u32) -> Self {
        self.selection_time = ticks;
        self
    }

    /// Sets the smallest bet a UI should offer.
    ///
    /// # Example
    ///
    /// ```
    /// use ecrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_bet(5);
    /// assert_eq!(options.min_bet, 5);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, bet: usize) -> Self {
        self.min_bet = bet;
        self
    }

    /// Sets the largest bet the engine accepts.
    ///
    /// # Example
    ///
    /// ```
    /// use ecrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_bet(200);
    /// assert_eq!(options.max_bet, 200);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, bet: usize) -> Self {
        self.max_bet = bet;
        self
    }

    /// Sets the ante.
    ///
    /// # Example
    ///
    /// ```
    /// use ecrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_ante(20);
    /// assert_eq!(options.ante, 20);
    /// ```
    #[must_use]
    pub const fn with_ante(mut self, ante: usize) -> Self {
        self.ante = ante;
        self
    }
}
