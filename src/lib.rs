//! A blackjack round simulator with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays whole rounds: betting,
//! dealing, every player's hands (including splits and doubles) as chosen by
//! a pluggable [`Strategy`], the dealer's fixed policy, and settlement. A
//! [`Simulation`] repeats rounds and tallies the outcome.
//!
//! # Example
//!
//! ```
//! use bjsim::strategy::{BasicStrategy, PerfectStrategy};
//! use bjsim::{Game, GameOptions, Player, Simulation};
//!
//! let players = vec![
//!     Player::new("chart", 1_000.0, PerfectStrategy),
//!     Player::new("basic", 1_000.0, BasicStrategy),
//! ];
//! let game = Game::new(players, GameOptions::default(), 42).unwrap();
//! let summary = Simulation::new(game).run(100).unwrap();
//! assert_eq!(summary.rounds, 100);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod player;
pub mod result;
pub mod shoe;
pub mod simulation;
pub mod strategy;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{
    ActionError, BetError, CardError, ConfigError, DealerError, RoundError, ShoeError,
    StrategyError,
};
pub use game::{Dealer, Game, RoundState, TurnPosition};
pub use hand::{Hand, HandKind, HandValue};
pub use options::GameOptions;
pub use player::Player;
pub use result::{HandOutcome, HandResult, PlayerResult, RoundResult};
pub use shoe::Shoe;
pub use simulation::{PlayerSummary, Simulation, SimulationSummary};
pub use strategy::{Action, Allowed, Strategy};
