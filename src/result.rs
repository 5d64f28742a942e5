//! Round result types for settlement.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::BetError;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandOutcome {
    /// Player wins even money (dealer busts or player has the higher total).
    Win,
    /// Player loses (player busts or dealer has the higher total).
    Lose,
    /// Push (tie).
    Push,
    /// Player's natural beats a dealer without one.
    Blackjack,
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandResult {
    /// The hand index (for split hands).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The stake riding on the hand.
    pub bet: f64,
    /// Amount credited back to the bankroll, stake included.
    pub payout: f64,
    /// The player's hand total.
    pub player_value: u8,
    /// The number of cards in the hand.
    pub cards: usize,
}

/// Result for a single player after settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerResult {
    /// Seat index.
    pub player_index: usize,
    /// Player name.
    pub name: String,
    /// Why the player sat the round out, if they did.
    pub bet_error: Option<BetError>,
    /// Results for each hand (multiple if split).
    pub hands: Vec<HandResult>,
    /// Total staked across all hands.
    pub total_bet: f64,
    /// Total payout for all hands.
    pub total_payout: f64,
    /// Net result (positive = profit, negative = loss).
    pub net: f64,
    /// Bankroll after settlement.
    pub bankroll: f64,
}

/// Result of the entire round after settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}
