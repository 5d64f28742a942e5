//! Playing strategies.
//!
//! A [`Strategy`] looks at one hand and the dealer's upcard value (2 through
//! 11, ace counted as 11) and picks the next [`Action`]. The round engine
//! validates the choice; a strategy never mutates the hand itself.

use core::fmt;

use crate::error::StrategyError;
use crate::hand::Hand;

mod chart;
mod simple;

pub use chart::PerfectStrategy;
pub use simple::{AggressiveStrategy, BasicStrategy, RandomStrategy, SafeStrategy, SplitStrategy};

/// A player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take one more card.
    Hit,
    /// Keep the current hand.
    Stand,
    /// Double the stake, take exactly one card, then stop.
    DoubleDown,
    /// Split a pair into two hands.
    Split,
}

/// Optional actions the table will accept for the current decision.
///
/// Hitting and standing are always accepted. Doubling and splitting are
/// withdrawn for the rest of a hand once the extra wager they need has been
/// refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allowed {
    /// Whether a double down may be requested.
    pub double_down: bool,
    /// Whether a split may be requested.
    pub split: bool,
}

impl Allowed {
    /// Every action is on offer.
    pub const ALL: Self = Self {
        double_down: true,
        split: true,
    };

    /// Only hit and stand are on offer.
    pub const HIT_OR_STAND: Self = Self {
        double_down: false,
        split: false,
    };

    /// Returns whether `action` may be requested.
    #[must_use]
    pub const fn permits(self, action: Action) -> bool {
        match action {
            Action::Hit | Action::Stand => true,
            Action::DoubleDown => self.double_down,
            Action::Split => self.split,
        }
    }

    /// Returns a copy with `action` withdrawn.
    #[must_use]
    pub const fn without(mut self, action: Action) -> Self {
        match action {
            Action::DoubleDown => self.double_down = false,
            Action::Split => self.split = false,
            Action::Hit | Action::Stand => {}
        }
        self
    }
}

impl Default for Allowed {
    fn default() -> Self {
        Self::ALL
    }
}

/// Decides how to play a hand.
pub trait Strategy: fmt::Debug {
    /// Returns the next action for `hand` against a dealer showing
    /// `dealer_upcard` (2 through 11), choosing only among `allowed` actions.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy has no decision for this situation.
    fn decide_with(
        &mut self,
        hand: &Hand,
        dealer_upcard: u8,
        allowed: Allowed,
    ) -> Result<Action, StrategyError>;

    /// Returns the next action with every action on offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the strategy has no decision for this situation.
    fn decide(&mut self, hand: &Hand, dealer_upcard: u8) -> Result<Action, StrategyError> {
        self.decide_with(hand, dealer_upcard, Allowed::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn withdrawn_actions_are_not_permitted() {
        let allowed = Allowed::ALL.without(Action::DoubleDown);
        assert!(!allowed.permits(Action::DoubleDown));
        assert!(allowed.permits(Action::Split));
        assert!(allowed.permits(Action::Hit));

        let allowed = allowed.without(Action::Split);
        assert_eq!(allowed, Allowed::HIT_OR_STAND);
        assert!(allowed.permits(Action::Stand));
        assert_eq!(Allowed::ALL.without(Action::Hit), Allowed::ALL);
    }
}
