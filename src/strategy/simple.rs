//! Heuristic strategies.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::{Action, Allowed, Strategy};
use crate::error::StrategyError;
use crate::hand::Hand;

/// Hits or stands with equal probability.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha8Rng,
}

impl RandomStrategy {
    /// Creates a random strategy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn decide_with(
        &mut self,
        _hand: &Hand,
        _dealer_upcard: u8,
        _allowed: Allowed,
    ) -> Result<Action, StrategyError> {
        Ok(if self.rng.random_bool(0.5) {
            Action::Hit
        } else {
            Action::Stand
        })
    }
}

/// Hits below 17, otherwise stands.
#[derive(Debug, Clone, Copy, Default)]
pub struct AggressiveStrategy;

impl Strategy for AggressiveStrategy {
    fn decide_with(
        &mut self,
        hand: &Hand,
        _dealer_upcard: u8,
        _allowed: Allowed,
    ) -> Result<Action, StrategyError> {
        Ok(if hand.total() < 17 {
            Action::Hit
        } else {
            Action::Stand
        })
    }
}

/// Hits below 12 or on any soft total, otherwise stands.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafeStrategy;

impl Strategy for SafeStrategy {
    fn decide_with(
        &mut self,
        hand: &Hand,
        _dealer_upcard: u8,
        _allowed: Allowed,
    ) -> Result<Action, StrategyError> {
        let value = hand.value();
        Ok(if value.total < 12 || value.is_soft() {
            Action::Hit
        } else {
            Action::Stand
        })
    }
}

/// Splits every pair it is allowed to and stands on everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitStrategy;

impl Strategy for SplitStrategy {
    fn decide_with(
        &mut self,
        hand: &Hand,
        _dealer_upcard: u8,
        allowed: Allowed,
    ) -> Result<Action, StrategyError> {
        Ok(if allowed.split && hand.can_split() {
            Action::Split
        } else {
            Action::Stand
        })
    }
}

/// A compact approximation of the full basic-strategy chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicStrategy;

impl BasicStrategy {
    const fn double_or_hit(can_double: bool) -> Action {
        if can_double {
            Action::DoubleDown
        } else {
            Action::Hit
        }
    }
}

impl Strategy for BasicStrategy {
    fn decide_with(
        &mut self,
        hand: &Hand,
        dealer_upcard: u8,
        allowed: Allowed,
    ) -> Result<Action, StrategyError> {
        let value = hand.value();
        let two_cards = allowed.double_down && hand.len() == 2;

        // Aces and eights always; small pairs, sixes, sevens and nines against
        // a weak upcard. Any other pair is played as a total.
        if allowed.split && hand.can_split() {
            match hand.cards()[0].value() {
                1 | 8 => return Ok(Action::Split),
                2 | 3 | 6 | 7 | 9 if dealer_upcard < 7 => return Ok(Action::Split),
                _ => {}
            }
        }

        let action = if value.is_soft() {
            match value.total {
                ..=15 => Action::Hit,
                16..=18 => Self::double_or_hit(dealer_upcard >= 7 && two_cards),
                _ => Action::Stand,
            }
        } else {
            match value.total {
                ..=8 => Action::Hit,
                9 => Self::double_or_hit(dealer_upcard < 7 && two_cards),
                10 => Self::double_or_hit(dealer_upcard < 10 && two_cards),
                11 => Self::double_or_hit(dealer_upcard < 11 && two_cards),
                12..=16 if dealer_upcard >= 7 => Action::Hit,
                _ => Action::Stand,
            }
        };
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};

    fn hand(ranks: &[u8]) -> Hand {
        let mut hand = Hand::new(1.0);
        for &rank in ranks {
            hand.add_card(Card::new(Suit::Diamonds, rank).unwrap());
        }
        hand
    }

    #[test]
    fn random_only_hits_or_stands() {
        let mut strategy = RandomStrategy::new(3);
        let mut seen_hit = false;
        let mut seen_stand = false;
        for _ in 0..64 {
            match strategy.decide(&hand(&[10, 6]), 10).unwrap() {
                Action::Hit => seen_hit = true,
                Action::Stand => seen_stand = true,
                other => panic!("unexpected action {other:?}"),
            }
        }
        assert!(seen_hit && seen_stand);
    }

    #[test]
    fn aggressive_hits_below_seventeen() {
        let mut strategy = AggressiveStrategy;
        assert_eq!(strategy.decide(&hand(&[10, 6]), 2), Ok(Action::Hit));
        assert_eq!(strategy.decide(&hand(&[10, 7]), 2), Ok(Action::Stand));
        assert_eq!(strategy.decide(&hand(&[1, 6]), 2), Ok(Action::Stand));
    }

    #[test]
    fn safe_hits_soft_hands() {
        let mut strategy = SafeStrategy;
        assert_eq!(strategy.decide(&hand(&[5, 6]), 9), Ok(Action::Hit));
        assert_eq!(strategy.decide(&hand(&[10, 2]), 9), Ok(Action::Stand));
        assert_eq!(strategy.decide(&hand(&[1, 8]), 9), Ok(Action::Hit));
    }

    #[test]
    fn split_strategy_splits_pairs_only() {
        let mut strategy = SplitStrategy;
        assert_eq!(strategy.decide(&hand(&[4, 4]), 9), Ok(Action::Split));
        assert_eq!(strategy.decide(&hand(&[10, 12]), 9), Ok(Action::Stand));
    }

    #[test]
    fn basic_pair_rules() {
        let mut strategy = BasicStrategy;
        assert_eq!(strategy.decide(&hand(&[1, 1]), 11), Ok(Action::Split));
        assert_eq!(strategy.decide(&hand(&[8, 8]), 10), Ok(Action::Split));
        assert_eq!(strategy.decide(&hand(&[9, 9]), 6), Ok(Action::Split));
        // 9,9 vs 7 falls back to hard 18.
        assert_eq!(strategy.decide(&hand(&[9, 9]), 7), Ok(Action::Stand));
        // 5,5 is never split: hard 10.
        assert_eq!(strategy.decide(&hand(&[5, 5]), 6), Ok(Action::DoubleDown));
    }

    #[test]
    fn basic_soft_rules() {
        let mut strategy = BasicStrategy;
        assert_eq!(strategy.decide(&hand(&[1, 4]), 5), Ok(Action::Hit));
        assert_eq!(strategy.decide(&hand(&[1, 6]), 9), Ok(Action::DoubleDown));
        assert_eq!(strategy.decide(&hand(&[1, 6]), 5), Ok(Action::Hit));
        assert_eq!(strategy.decide(&hand(&[1, 2, 4]), 9), Ok(Action::Hit));
        assert_eq!(strategy.decide(&hand(&[1, 8]), 9), Ok(Action::Stand));
    }

    #[test]
    fn basic_hard_rules() {
        let mut strategy = BasicStrategy;
        assert_eq!(strategy.decide(&hand(&[3, 5]), 5), Ok(Action::Hit));
        assert_eq!(strategy.decide(&hand(&[4, 5]), 6), Ok(Action::DoubleDown));
        assert_eq!(strategy.decide(&hand(&[4, 5]), 7), Ok(Action::Hit));
        assert_eq!(strategy.decide(&hand(&[4, 6]), 9), Ok(Action::DoubleDown));
        assert_eq!(strategy.decide(&hand(&[4, 6]), 10), Ok(Action::Hit));
        assert_eq!(strategy.decide(&hand(&[5, 6]), 10), Ok(Action::DoubleDown));
        assert_eq!(strategy.decide(&hand(&[5, 6]), 11), Ok(Action::Hit));
        assert_eq!(strategy.decide(&hand(&[2, 3, 6]), 10), Ok(Action::Hit));
        assert_eq!(strategy.decide(&hand(&[10, 3]), 4), Ok(Action::Stand));
        assert_eq!(strategy.decide(&hand(&[10, 3]), 7), Ok(Action::Hit));
        assert_eq!(strategy.decide(&hand(&[10, 8]), 11), Ok(Action::Stand));
    }

    #[test]
    fn withdrawn_options_fall_back_to_totals() {
        let mut basic = BasicStrategy;
        let no_double = Allowed::ALL.without(Action::DoubleDown);
        let no_split = Allowed::ALL.without(Action::Split);
        assert_eq!(basic.decide_with(&hand(&[5, 6]), 10, no_double), Ok(Action::Hit));
        assert_eq!(basic.decide_with(&hand(&[1, 6]), 9, no_double), Ok(Action::Hit));
        assert_eq!(basic.decide_with(&hand(&[8, 8]), 10, no_split), Ok(Action::Hit));
        assert_eq!(basic.decide_with(&hand(&[8, 8]), 5, no_split), Ok(Action::Stand));

        let mut splitter = SplitStrategy;
        assert_eq!(splitter.decide_with(&hand(&[4, 4]), 9, no_split), Ok(Action::Stand));
    }
}
