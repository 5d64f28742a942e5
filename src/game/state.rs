//! Round state types.

/// Phase of the round state machine.
///
/// A round moves strictly forward through
/// `Betting → Dealing → PlayerTurns → DealerTurn → Settlement → Done`.
/// A table that has not played yet also reports `Done`. If a round fails,
/// the state stays at the phase that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// Clearing hands and taking wagers.
    Betting,
    /// Dealing two cards to every hand and the dealer.
    Dealing,
    /// Players act on their hands in seat order.
    PlayerTurns,
    /// Dealer completes their hand.
    DealerTurn,
    /// Hands are paid or collected.
    Settlement,
    /// No round in progress.
    #[default]
    Done,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// Index into the table's players.
    pub player_index: usize,
    /// Index into the player's hands (for splits).
    pub hand_index: usize,
}
