//! Table configuration options.

use crate::error::ConfigError;
use crate::shoe;

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_blackjack_pays(1.2)
///     .with_hit_soft_17(false);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe (1 to 8).
    pub decks: u8,
    /// Whether the dealer hits soft 17.
    pub hit_soft_17: bool,
    /// Whether the shoe is shuffled when built and whenever it is rebuilt.
    pub shuffle_on_init: bool,
    /// Fraction of the shoe dealt before it is rebuilt, strictly between 0 and 1.
    pub penetration: f64,
    /// Blackjack payout multiplier (typically 1.5).
    pub blackjack_pays: f64,
    /// Wager used when a round is played without an explicit amount.
    pub default_bet: f64,
    /// Maximum number of splits per player per round; `None` for no limit.
    pub max_splits: Option<u8>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            hit_soft_17: true,
            shuffle_on_init: true,
            penetration: 0.75,
            blackjack_pays: 1.5,
            default_bet: 1.0,
            max_splits: None,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether the dealer hits soft 17.
    #[must_use]
    pub const fn with_hit_soft_17(mut self, hit: bool) -> Self {
        self.hit_soft_17 = hit;
        self
    }

    /// Sets whether the shoe is shuffled.
    ///
    /// An unshuffled shoe deals in fresh-deck order, which is handy for
    /// reproducing a hand by hand.
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle_on_init = shuffle;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the blackjack payout multiplier.
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the default wager.
    #[must_use]
    pub const fn with_default_bet(mut self, bet: f64) -> Self {
        self.default_bet = bet;
        self
    }

    /// Caps the number of splits per player per round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_splits(Some(3));
    /// assert_eq!(options.max_splits, Some(3));
    /// ```
    #[must_use]
    pub const fn with_max_splits(mut self, max_splits: Option<u8>) -> Self {
        self.max_splits = max_splits;
        self
    }

    /// Checks that every option is in range.
    ///
    /// The default bet is not checked here: a bad wager only causes players
    /// to sit out, which the round handles on its own.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range option found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        shoe::validate(self.decks, self.penetration)?;
        if !(self.blackjack_pays.is_finite() && self.blackjack_pays > 0.0) {
            return Err(ConfigError::InvalidBlackjackPays(self.blackjack_pays));
        }
        Ok(())
    }
}
