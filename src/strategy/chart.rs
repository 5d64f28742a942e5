//! Exact basic-strategy chart for four to eight decks, dealer hits soft 17.
//!
//! Five tables are indexed by `[row][dealer upcard]`, where the upcard runs
//! from 2 to 11 (ace). Pairs use the split table with the pair's base value
//! as the row (ace = 1). Everything else uses a hard or soft table indexed by
//! total, in a "double allowed" variant for two-card hands and a "double
//! forbidden" variant for hands that have already drawn.
//!
//! Cells outside the chart hold `None`; a lookup that lands on one is
//! reported as [`StrategyError::UnmappedCell`].

use super::{Action, Allowed, Strategy};
use crate::error::StrategyError;
use crate::hand::Hand;

use super::Action::{DoubleDown as D, Hit as H, Split as P, Stand as S};

const COLS: usize = 12;
const PAIR_ROWS: usize = 11;
const TOTAL_ROWS: usize = 22;

type Table<const ROWS: usize> = [[Option<Action>; COLS]; ROWS];

/// Sets every cell in the inclusive `rows` x `dealer` rectangle.
const fn fill<const ROWS: usize>(
    mut table: Table<ROWS>,
    rows: (usize, usize),
    dealer: (usize, usize),
    action: Action,
) -> Table<ROWS> {
    let mut row = rows.0;
    while row <= rows.1 {
        let mut col = dealer.0;
        while col <= dealer.1 {
            table[row][col] = Some(action);
            col += 1;
        }
        row += 1;
    }
    table
}

const SPLIT: Table<PAIR_ROWS> = {
    let t = [[None; COLS]; PAIR_ROWS];
    let t = fill(t, (1, 1), (2, 11), P);
    let t = fill(t, (2, 3), (2, 7), P);
    let t = fill(t, (2, 3), (8, 11), H);
    let t = fill(t, (4, 4), (2, 4), H);
    let t = fill(t, (4, 4), (5, 6), P);
    let t = fill(t, (4, 4), (7, 11), H);
    // Fives are played as a hard ten.
    let t = fill(t, (5, 5), (2, 9), D);
    let t = fill(t, (5, 5), (10, 11), H);
    let t = fill(t, (6, 6), (2, 6), P);
    let t = fill(t, (6, 6), (7, 11), H);
    let t = fill(t, (7, 7), (2, 7), P);
    let t = fill(t, (7, 7), (8, 11), H);
    let t = fill(t, (8, 8), (2, 11), P);
    let t = fill(t, (9, 9), (2, 6), P);
    let t = fill(t, (9, 9), (7, 7), S);
    let t = fill(t, (9, 9), (8, 9), P);
    let t = fill(t, (9, 9), (10, 11), S);
    fill(t, (10, 10), (2, 11), S)
};

/// Hard totals shared by both variants; 9 through 11 are left for the
/// variant to decide.
const HARD_COMMON: Table<TOTAL_ROWS> = {
    let t = [[None; COLS]; TOTAL_ROWS];
    let t = fill(t, (2, 8), (2, 11), H);
    let t = fill(t, (12, 12), (2, 3), H);
    let t = fill(t, (12, 12), (4, 6), S);
    let t = fill(t, (12, 12), (7, 11), H);
    let t = fill(t, (13, 16), (2, 6), S);
    let t = fill(t, (13, 16), (7, 11), H);
    fill(t, (17, 21), (2, 11), S)
};

const HARD_DOUBLE: Table<TOTAL_ROWS> = {
    let t = fill(HARD_COMMON, (9, 9), (2, 2), H);
    let t = fill(t, (9, 9), (3, 6), D);
    let t = fill(t, (9, 9), (7, 11), H);
    let t = fill(t, (10, 10), (2, 9), D);
    let t = fill(t, (10, 10), (10, 11), H);
    let t = fill(t, (11, 11), (2, 10), D);
    fill(t, (11, 11), (11, 11), H)
};

const HARD_NO_DOUBLE: Table<TOTAL_ROWS> = fill(HARD_COMMON, (9, 11), (2, 11), H);

const SOFT_DOUBLE: Table<TOTAL_ROWS> = {
    let t = [[None; COLS]; TOTAL_ROWS];
    let t = fill(t, (12, 12), (2, 11), H);
    let t = fill(t, (13, 14), (2, 4), H);
    let t = fill(t, (13, 14), (5, 6), D);
    let t = fill(t, (13, 14), (7, 11), H);
    let t = fill(t, (15, 16), (2, 3), H);
    let t = fill(t, (15, 16), (4, 6), D);
    let t = fill(t, (15, 16), (7, 11), H);
    let t = fill(t, (17, 17), (2, 2), H);
    let t = fill(t, (17, 17), (3, 6), D);
    let t = fill(t, (17, 17), (7, 11), H);
    let t = fill(t, (18, 18), (2, 6), D);
    let t = fill(t, (18, 18), (7, 8), S);
    let t = fill(t, (18, 18), (9, 11), H);
    let t = fill(t, (19, 19), (2, 5), S);
    let t = fill(t, (19, 19), (6, 6), D);
    let t = fill(t, (19, 19), (7, 11), S);
    fill(t, (20, 21), (2, 11), S)
};

const SOFT_NO_DOUBLE: Table<TOTAL_ROWS> = {
    let t = [[None; COLS]; TOTAL_ROWS];
    let t = fill(t, (12, 17), (2, 11), H);
    let t = fill(t, (18, 18), (2, 8), S);
    let t = fill(t, (18, 18), (9, 11), H);
    fill(t, (19, 21), (2, 11), S)
};

fn lookup<const ROWS: usize>(
    table: &Table<ROWS>,
    name: &'static str,
    row: u8,
    dealer: u8,
) -> Result<Action, StrategyError> {
    table
        .get(usize::from(row))
        .and_then(|cells| cells.get(usize::from(dealer)))
        .copied()
        .flatten()
        .ok_or(StrategyError::UnmappedCell {
            table: name,
            row,
            dealer,
        })
}

/// Plays the exact chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerfectStrategy;

impl Strategy for PerfectStrategy {
    fn decide_with(
        &mut self,
        hand: &Hand,
        dealer_upcard: u8,
        allowed: Allowed,
    ) -> Result<Action, StrategyError> {
        if allowed.split && hand.can_split() {
            let row = hand.cards()[0].value();
            let action = lookup(&SPLIT, "split", row, dealer_upcard)?;
            // A pair the chart doubles is otherwise played as a total.
            if allowed.permits(action) {
                return Ok(action);
            }
        }

        let value = hand.value();
        let can_double = allowed.double_down && hand.len() == 2;
        let (table, name) = match (value.is_soft(), can_double) {
            (false, true) => (&HARD_DOUBLE, "hard"),
            (false, false) => (&HARD_NO_DOUBLE, "hard (no double)"),
            (true, true) => (&SOFT_DOUBLE, "soft"),
            (true, false) => (&SOFT_NO_DOUBLE, "soft (no double)"),
        };
        lookup(table, name, value.total, dealer_upcard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Suit};

    fn hand(ranks: &[u8]) -> Hand {
        let mut hand = Hand::new(1.0);
        for &rank in ranks {
            hand.add_card(Card::new(Suit::Spades, rank).unwrap());
        }
        hand
    }

    fn decide(ranks: &[u8], dealer: u8) -> Action {
        PerfectStrategy.decide(&hand(ranks), dealer).unwrap()
    }

    #[test]
    fn always_split_eights_and_aces() {
        for dealer in 2..=11 {
            assert_eq!(decide(&[8, 8], dealer), Action::Split);
            assert_eq!(decide(&[1, 1], dealer), Action::Split);
        }
    }

    #[test]
    fn never_split_fives_or_tens() {
        assert_eq!(decide(&[5, 5], 6), Action::DoubleDown);
        assert_eq!(decide(&[5, 5], 10), Action::Hit);
        assert_eq!(decide(&[13, 13], 6), Action::Stand);
        // Mixed tens are not a pair: hard 20.
        assert_eq!(decide(&[10, 12], 6), Action::Stand);
    }

    #[test]
    fn pair_bands() {
        assert_eq!(decide(&[2, 2], 7), Action::Split);
        assert_eq!(decide(&[2, 2], 8), Action::Hit);
        assert_eq!(decide(&[4, 4], 5), Action::Split);
        assert_eq!(decide(&[4, 4], 4), Action::Hit);
        assert_eq!(decide(&[6, 6], 6), Action::Split);
        assert_eq!(decide(&[6, 6], 7), Action::Hit);
        assert_eq!(decide(&[9, 9], 7), Action::Stand);
        assert_eq!(decide(&[9, 9], 8), Action::Split);
        assert_eq!(decide(&[9, 9], 11), Action::Stand);
    }

    #[test]
    fn hard_sixteen_after_hitting_hits_against_ten() {
        assert_eq!(decide(&[10, 3, 3], 10), Action::Hit);
        assert_eq!(decide(&[10, 3, 3], 6), Action::Stand);
    }

    #[test]
    fn hard_totals() {
        assert_eq!(decide(&[10, 2], 3), Action::Hit);
        assert_eq!(decide(&[10, 2], 4), Action::Stand);
        assert_eq!(decide(&[6, 5], 10), Action::DoubleDown);
        assert_eq!(decide(&[6, 5], 11), Action::Hit);
        assert_eq!(decide(&[2, 3, 6], 6), Action::Hit);
        assert_eq!(decide(&[4, 5], 2), Action::Hit);
        assert_eq!(decide(&[4, 5], 3), Action::DoubleDown);
        assert_eq!(decide(&[10, 7], 11), Action::Stand);
    }

    #[test]
    fn soft_totals() {
        assert_eq!(decide(&[1, 2], 5), Action::DoubleDown);
        assert_eq!(decide(&[1, 2], 4), Action::Hit);
        assert_eq!(decide(&[1, 7], 6), Action::DoubleDown);
        assert_eq!(decide(&[1, 7], 8), Action::Stand);
        assert_eq!(decide(&[1, 7], 9), Action::Hit);
        assert_eq!(decide(&[1, 3, 4], 6), Action::Stand);
        assert_eq!(decide(&[1, 8], 6), Action::DoubleDown);
        assert_eq!(decide(&[1, 2, 6], 6), Action::Stand);
        assert_eq!(decide(&[1, 9], 11), Action::Stand);
    }

    #[test]
    fn out_of_range_upcard_is_unmapped() {
        assert_eq!(
            PerfectStrategy.decide(&hand(&[10, 6]), 1),
            Err(StrategyError::UnmappedCell {
                table: "hard",
                row: 16,
                dealer: 1,
            })
        );
    }

    #[test]
    fn withdrawn_double_uses_the_no_double_column() {
        let mut strategy = PerfectStrategy;
        let no_double = Allowed::ALL.without(Action::DoubleDown);
        assert_eq!(strategy.decide(&hand(&[1, 8]), 6), Ok(Action::DoubleDown));
        assert_eq!(strategy.decide_with(&hand(&[1, 8]), 6, no_double), Ok(Action::Stand));
        assert_eq!(strategy.decide_with(&hand(&[1, 7]), 4, no_double), Ok(Action::Stand));
        assert_eq!(strategy.decide_with(&hand(&[6, 5]), 6, no_double), Ok(Action::Hit));
        // Fives fall through to hard ten.
        assert_eq!(strategy.decide_with(&hand(&[5, 5]), 6, no_double), Ok(Action::Hit));
    }

    #[test]
    fn withdrawn_split_plays_the_pair_as_a_total() {
        let mut strategy = PerfectStrategy;
        let no_split = Allowed::ALL.without(Action::Split);
        assert_eq!(strategy.decide_with(&hand(&[8, 8]), 10, no_split), Ok(Action::Hit));
        assert_eq!(strategy.decide_with(&hand(&[8, 8]), 6, no_split), Ok(Action::Stand));
        assert_eq!(strategy.decide_with(&hand(&[1, 1]), 6, no_split), Ok(Action::Hit));
        assert_eq!(strategy.decide_with(&hand(&[4, 4]), 5, no_split), Ok(Action::Hit));
        assert_eq!(
            strategy.decide_with(&hand(&[1, 1]), 6, Allowed::HIT_OR_STAND),
            Ok(Action::Hit)
        );
    }

    #[test]
    fn every_reachable_cell_is_populated() {
        let mut strategy = PerfectStrategy;
        let offers = [
            Allowed::ALL,
            Allowed::ALL.without(Action::DoubleDown),
            Allowed::ALL.without(Action::Split),
            Allowed::HIT_OR_STAND,
        ];
        for allowed in offers {
            for a in 1..=13 {
                for b in 1..=13 {
                    for dealer in 2..=11 {
                        let two = hand(&[a, b]);
                        let action = strategy.decide_with(&two, dealer, allowed);
                        assert!(
                            action.is_ok_and(|action| allowed.permits(action)),
                            "{two} vs {dealer} with {allowed:?}"
                        );

                        for c in 1..=13 {
                            let three = hand(&[a, b, c]);
                            if three.total() < 21 {
                                let action = strategy.decide_with(&three, dealer, allowed);
                                assert!(
                                    action.is_ok_and(|action| allowed.permits(action)),
                                    "{three} vs {dealer} with {allowed:?}"
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}
