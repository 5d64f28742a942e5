//! Players: bankroll, hands and the strategy that plays them.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::error::{BetError, StrategyError};
use crate::hand::Hand;
use crate::strategy::{Action, Strategy};

/// A seat at the table.
///
/// The bankroll and identity persist across rounds; hands are rebuilt every
/// round.
#[derive(Debug)]
pub struct Player {
    name: String,
    bankroll: f64,
    strategy: Box<dyn Strategy>,
    hands: Vec<Hand>,
    current_bet: f64,
}

impl Player {
    /// Creates a player with a starting bankroll and strategy.
    pub fn new(name: impl Into<String>, bankroll: f64, strategy: impl Strategy + 'static) -> Self {
        Self {
            name: name.into(),
            bankroll,
            strategy: Box::new(strategy),
            hands: Vec::new(),
            current_bet: 0.0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> f64 {
        self.bankroll
    }

    /// Returns the most recently placed wager.
    ///
    /// This tracks the last call to [`Player::place_bet`] only; each hand
    /// carries its own stake, see [`Hand::bet`].
    #[must_use]
    pub const fn current_bet(&self) -> f64 {
        self.current_bet
    }

    /// Returns the player's hands for this round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub(crate) const fn hands_mut(&mut self) -> &mut Vec<Hand> {
        &mut self.hands
    }

    /// Deducts `amount` from the bankroll and records it as the current wager.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NonPositive`] if `amount` is not positive and
    /// [`BetError::InsufficientFunds`] if the bankroll does not cover it.
    pub fn place_bet(&mut self, amount: f64) -> Result<(), BetError> {
        if amount.is_nan() || amount <= 0.0 {
            return Err(BetError::NonPositive(amount));
        }
        if self.bankroll < amount {
            return Err(BetError::InsufficientFunds);
        }

        self.bankroll -= amount;
        self.current_bet = amount;
        Ok(())
    }

    /// Adds a hand to the player's active hands.
    pub fn add_hand(&mut self, hand: Hand) {
        self.hands.push(hand);
    }

    /// Clears all hands in preparation for a new round.
    pub fn reset_hands(&mut self) {
        self.hands.clear();
        self.current_bet = 0.0;
    }

    /// Asks the player's strategy how to play `hand`.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's error.
    pub fn decide(&mut self, hand: &Hand, dealer_upcard: u8) -> Result<Action, StrategyError> {
        self.strategy.decide(hand, dealer_upcard)
    }

    /// Returns hand `index` together with the strategy that plays it.
    pub(crate) fn hand_with_strategy(
        &mut self,
        index: usize,
    ) -> Option<(&Hand, &mut (dyn Strategy + 'static))> {
        let hand = self.hands.get(index)?;
        Some((hand, &mut *self.strategy))
    }

    /// Pays out hand `index` as a win at `multiplier`, returning the payout.
    pub fn win(&mut self, index: usize, multiplier: f64) -> f64 {
        let payout = self.hands.get_mut(index).map_or(0.0, |hand| hand.win(multiplier));
        self.bankroll += payout;
        payout
    }

    /// Settles hand `index` as a loss.
    pub fn lose(&mut self, index: usize) {
        if let Some(hand) = self.hands.get_mut(index) {
            hand.lose();
        }
    }

    /// Returns the stake of hand `index` to the bankroll, returning the amount.
    pub fn push(&mut self, index: usize) -> f64 {
        let payout = self.hands.get_mut(index).map_or(0.0, Hand::push);
        self.bankroll += payout;
        payout
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (bankroll {:.2})", self.name, self.bankroll)
    }
}
