//! Repeated rounds and their running tally.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::info;

use crate::error::RoundError;
use crate::game::Game;
use crate::result::{HandOutcome, RoundResult};

/// Final standing of one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSummary {
    /// Player name.
    pub name: String,
    /// Bankroll after the last round.
    pub bankroll: f64,
    /// Sum of per-round net results.
    pub net: f64,
    /// Rounds the player sat out because a wager was refused.
    pub rounds_sat_out: u64,
}

/// Totals accumulated over a simulation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationSummary {
    /// Rounds played.
    pub rounds: u64,
    /// Hands settled, split hands counted separately.
    pub hands: u64,
    /// Hands won at even money.
    pub wins: u64,
    /// Hands won with a natural.
    pub blackjacks: u64,
    /// Hands lost.
    pub losses: u64,
    /// Hands pushed.
    pub pushes: u64,
    /// Total amount staked.
    pub total_wagered: f64,
    /// Net result across all players.
    pub net: f64,
    /// Per-player standing, in seat order.
    pub players: Vec<PlayerSummary>,
}

impl SimulationSummary {
    /// Folds one round into the tally.
    pub fn record(&mut self, round: &RoundResult) {
        self.rounds += 1;

        for player in &round.players {
            if self.players.len() <= player.player_index {
                self.players.resize_with(player.player_index + 1, || PlayerSummary {
                    name: String::new(),
                    bankroll: 0.0,
                    net: 0.0,
                    rounds_sat_out: 0,
                });
            }
            let summary = &mut self.players[player.player_index];
            summary.name.clone_from(&player.name);
            summary.bankroll = player.bankroll;
            summary.net += player.net;
            if player.bet_error.is_some() {
                summary.rounds_sat_out += 1;
            }

            for hand in &player.hands {
                self.hands += 1;
                match hand.outcome {
                    HandOutcome::Win => self.wins += 1,
                    HandOutcome::Blackjack => self.blackjacks += 1,
                    HandOutcome::Lose => self.losses += 1,
                    HandOutcome::Push => self.pushes += 1,
                }
            }
            self.total_wagered += player.total_bet;
            self.net += player.net;
        }
    }

    /// Net result per unit wagered, or zero if nothing was wagered.
    #[must_use]
    pub fn edge(&self) -> f64 {
        if self.total_wagered > 0.0 {
            self.net / self.total_wagered
        } else {
            0.0
        }
    }
}

/// Drives a [`Game`] for a number of rounds.
#[derive(Debug)]
pub struct Simulation {
    game: Game,
    summary: SimulationSummary,
}

impl Simulation {
    /// Wraps a table.
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            summary: SimulationSummary::default(),
        }
    }

    /// Plays `rounds` rounds at the table's default bet and returns the
    /// running tally.
    ///
    /// # Errors
    ///
    /// Stops at the first round that fails and returns its error.
    pub fn run(&mut self, rounds: u64) -> Result<SimulationSummary, RoundError> {
        info!(rounds, players = self.game.players().len(), "starting simulation");
        for _ in 0..rounds {
            let result = self.game.play_round(None)?;
            self.summary.record(&result);
        }
        info!(
            rounds = self.summary.rounds,
            hands = self.summary.hands,
            net = self.summary.net,
            "simulation completed"
        );
        Ok(self.summary.clone())
    }

    /// Returns the table being driven.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the tally so far.
    #[must_use]
    pub const fn summary(&self) -> &SimulationSummary {
        &self.summary
    }
}
