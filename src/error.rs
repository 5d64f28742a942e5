//! Error types for simulator operations.

use thiserror::Error;

use crate::game::TurnPosition;
use crate::strategy::Action;

/// Errors that can occur when constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}, expected 1..=13")]
    InvalidRank(u8),
}

/// Errors raised by invalid table configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Deck count outside `1..=8`.
    #[error("deck count must be between 1 and 8, got {0}")]
    InvalidDeckCount(u8),
    /// Penetration not strictly between 0 and 1.
    #[error("penetration must be strictly between 0 and 1, got {0}")]
    InvalidPenetration(f64),
    /// Blackjack multiplier is not a positive finite number.
    #[error("blackjack payout must be positive, got {0}")]
    InvalidBlackjackPays(f64),
}

/// Errors that can occur when placing a wager.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BetError {
    /// Bet amount is zero, negative or not a number.
    #[error("bet must be positive, got {0}")]
    NonPositive(f64),
    /// Bankroll does not cover the bet.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// No cards left even after rebuilding.
    #[error("no cards left in the shoe")]
    Empty,
}

/// Errors raised by the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Upcard requested before any card was dealt.
    #[error("dealer has no cards to show as upcard")]
    NoUpcard,
}

/// Errors raised by a playing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// A chart lookup landed on a cell that holds no action.
    #[error("{table} chart has no entry for row {row} against dealer {dealer}")]
    UnmappedCell {
        /// Name of the chart that was consulted.
        table: &'static str,
        /// Row index (pair value or hand total).
        row: u8,
        /// Dealer upcard value.
        dealer: u8,
    },
}

/// Errors that can occur when applying a player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Double down requested on a hand without exactly two cards.
    #[error("cannot double down on a hand of {0} cards")]
    CannotDouble(usize),
    /// Split requested on a hand that is not a two-card pair.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The action was withdrawn after its extra wager was refused.
    #[error("{0:?} is no longer on offer for this hand")]
    NotOffered(Action),
}

/// Fatal errors that abort a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// A strategy asked for an action the hand does not allow.
    #[error("illegal action at player {}, hand {}: {source}", .position.player_index, .position.hand_index)]
    IllegalAction {
        /// Where in the round the action was requested.
        position: TurnPosition,
        /// The rejected action.
        source: ActionError,
    },
    /// A strategy failed to produce a decision.
    #[error(transparent)]
    Strategy(#[from] StrategyError),
    /// The dealer was queried in an invalid state.
    #[error(transparent)]
    Dealer(#[from] DealerError),
    /// The shoe could not serve a card.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}
