//! Command-line driver: plays a number of rounds and prints a summary.

use std::process::ExitCode;

use bjsim::strategy::{
    AggressiveStrategy, BasicStrategy, PerfectStrategy, RandomStrategy, SafeStrategy,
    SplitStrategy,
};
use bjsim::{Game, GameOptions, Player, Simulation, SimulationSummary};
use clap::{Parser, ValueEnum};
use tracing::error;

/// Playing strategy for a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    /// Hit or stand at random.
    Random,
    /// Hit below 17.
    Aggressive,
    /// Hit below 12 or on soft totals.
    Safe,
    /// Split every pair, otherwise stand.
    Split,
    /// Compact basic-strategy approximation.
    Basic,
    /// Exact basic-strategy chart.
    Perfect,
}

/// Simulate rounds of blackjack.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of rounds to play.
    #[arg(short, long, default_value_t = 10_000)]
    rounds: u64,

    /// Strategy for each seat; repeat to add seats.
    #[arg(short, long = "strategy", value_enum, default_values_t = [StrategyKind::Perfect])]
    strategies: Vec<StrategyKind>,

    /// Starting bankroll for every seat.
    #[arg(long, default_value_t = 1_000.0)]
    bankroll: f64,

    /// Wager per hand.
    #[arg(long, default_value_t = 1.0)]
    bet: f64,

    /// Number of decks in the shoe (1 to 8).
    #[arg(long, default_value_t = 8)]
    decks: u8,

    /// Fraction of the shoe dealt before it is rebuilt.
    #[arg(long, default_value_t = 0.75)]
    penetration: f64,

    /// Dealer stands on soft 17 instead of hitting it.
    #[arg(long)]
    stand_soft_17: bool,

    /// Deal from an unshuffled shoe.
    #[arg(long)]
    no_shuffle: bool,

    /// Blackjack payout multiplier.
    #[arg(long, default_value_t = 1.5)]
    blackjack_pays: f64,

    /// Maximum splits per player per round.
    #[arg(long)]
    max_splits: Option<u8>,

    /// Seed for the shoe and random strategies.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bjsim=info"));

    fmt().with_env_filter(env_filter).with_target(true).init();
}

fn build_players(args: &Args) -> Vec<Player> {
    args.strategies
        .iter()
        .enumerate()
        .map(|(seat, kind)| {
            let name = format!("seat-{}-{kind:?}", seat + 1).to_lowercase();
            match kind {
                StrategyKind::Random => Player::new(
                    name,
                    args.bankroll,
                    RandomStrategy::new(args.seed.wrapping_add(seat as u64 + 1)),
                ),
                StrategyKind::Aggressive => Player::new(name, args.bankroll, AggressiveStrategy),
                StrategyKind::Safe => Player::new(name, args.bankroll, SafeStrategy),
                StrategyKind::Split => Player::new(name, args.bankroll, SplitStrategy),
                StrategyKind::Basic => Player::new(name, args.bankroll, BasicStrategy),
                StrategyKind::Perfect => Player::new(name, args.bankroll, PerfectStrategy),
            }
        })
        .collect()
}

fn print_summary(summary: &SimulationSummary) {
    println!("rounds:      {}", summary.rounds);
    println!("hands:       {}", summary.hands);
    println!("wins:        {}", summary.wins);
    println!("blackjacks:  {}", summary.blackjacks);
    println!("losses:      {}", summary.losses);
    println!("pushes:      {}", summary.pushes);
    println!("wagered:     {:.2}", summary.total_wagered);
    println!("net:         {:.2}", summary.net);
    println!("edge:        {:.4}%", summary.edge() * 100.0);
    println!();
    for player in &summary.players {
        println!(
            "{:<24} bankroll {:>12.2}  net {:>10.2}  sat out {}",
            player.name, player.bankroll, player.net, player.rounds_sat_out
        );
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let options = GameOptions::default()
        .with_decks(args.decks)
        .with_penetration(args.penetration)
        .with_hit_soft_17(!args.stand_soft_17)
        .with_shuffle(!args.no_shuffle)
        .with_blackjack_pays(args.blackjack_pays)
        .with_default_bet(args.bet)
        .with_max_splits(args.max_splits);

    let game = match Game::new(build_players(&args), options, args.seed) {
        Ok(game) => game,
        Err(err) => {
            error!(%err, "invalid table configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut simulation = Simulation::new(game);
    match simulation.run(args.rounds) {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, round = simulation.game().rounds_played() + 1, "round failed");
            print_summary(simulation.summary());
            ExitCode::FAILURE
        }
    }
}
