//! Round engine.

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::error::{ConfigError, RoundError};
use crate::options::GameOptions;
use crate::player::Player;
use crate::result::RoundResult;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::{Dealer, dealer_should_hit, hand_outcome};
pub use state::{RoundState, TurnPosition};

/// A blackjack table that plays whole rounds for a fixed set of players.
///
/// The table owns the shoe, the dealer and the players. The shoe and each
/// player's bankroll carry over from one round to the next; hands do not.
#[derive(Debug)]
pub struct Game {
    options: GameOptions,
    shoe: Shoe,
    players: Vec<Player>,
    dealer: Dealer,
    state: RoundState,
    rounds_played: u64,
}

impl Game {
    /// Creates a table with the given players, options and shuffle seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::strategy::PerfectStrategy;
    /// use bjsim::{Game, GameOptions, Player};
    ///
    /// let players = vec![Player::new("alice", 100.0, PerfectStrategy)];
    /// let mut game = Game::new(players, GameOptions::default(), 42).unwrap();
    /// let result = game.play_round(Some(5.0)).unwrap();
    /// assert_eq!(result.players.len(), 1);
    /// ```
    pub fn new(players: Vec<Player>, options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;
        let shoe = Shoe::new(
            options.decks,
            options.shuffle_on_init,
            options.penetration,
            seed,
        )?;

        Ok(Self {
            dealer: Dealer::new(options.hit_soft_17),
            options,
            shoe,
            players,
            state: RoundState::Done,
            rounds_played: 0,
        })
    }

    /// Plays one full round.
    ///
    /// Every player wagers `bet_amount`, or the configured default bet when
    /// `None`. Players whose wager is rejected sit the round out.
    ///
    /// # Errors
    ///
    /// Returns an error if a strategy picks an action its hand does not allow
    /// or fails to decide, or if the shoe or dealer fail. The round is
    /// abandoned where it failed; wagers already debited are not refunded.
    pub fn play_round(&mut self, bet_amount: Option<f64>) -> Result<RoundResult, RoundError> {
        let amount = bet_amount.unwrap_or(self.options.default_bet);
        debug!(round = self.rounds_played + 1, amount, "starting round");

        self.enter(RoundState::Betting);
        let bet_errors = self.place_bets(amount);

        self.enter(RoundState::Dealing);
        self.dealer.reset_hand();
        self.deal()?;

        self.enter(RoundState::PlayerTurns);
        let upcard = self.dealer.upcard()?;
        trace!(%upcard, "dealer upcard");
        self.play_player_turns(upcard.upcard_value())?;

        self.enter(RoundState::DealerTurn);
        let drawn = self.dealer.play(&mut self.shoe)?;
        trace!(drawn = drawn.len(), hand = %self.dealer.hand(), "dealer done");

        self.enter(RoundState::Settlement);
        let result = self.settle(bet_errors);

        self.enter(RoundState::Done);
        self.rounds_played += 1;
        Ok(result)
    }

    fn enter(&mut self, state: RoundState) {
        trace!(from = ?self.state, to = ?state, "round state");
        self.state = state;
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the number of rounds completed.
    #[must_use]
    pub const fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe mutably, e.g. to stack known cards.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }
}
