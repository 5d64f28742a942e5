use alloc::vec::Vec;
use core::fmt;

use tracing::debug;

use crate::card::Card;
use crate::error::{BetError, DealerError, ShoeError};
use crate::hand::{Hand, HandValue};
use crate::result::{HandOutcome, HandResult, PlayerResult, RoundResult};
use crate::shoe::Shoe;

use super::Game;

/// Returns whether a dealer holding `value` must draw.
///
/// The dealer draws below 17, and on soft 17 only when configured to hit
/// it. Any hard 17 or higher stands.
#[must_use]
pub const fn dealer_should_hit(value: HandValue, hit_soft_17: bool) -> bool {
    value.total < 17 || (value.total == 17 && value.is_soft() && hit_soft_17)
}

/// Settles a player hand against the dealer's final hand.
///
/// Precedence: a bust always loses, even when the dealer also busts; then a
/// natural beats any dealer hand that is not a natural; then a dealer bust
/// wins; otherwise totals are compared.
#[must_use]
pub fn hand_outcome(hand: &Hand, dealer: &Hand) -> HandOutcome {
    let total = hand.total();
    let dealer_total = dealer.total();

    if hand.is_bust() {
        HandOutcome::Lose
    } else if hand.is_blackjack() && !dealer.is_blackjack() {
        HandOutcome::Blackjack
    } else if dealer.is_bust() || total > dealer_total {
        HandOutcome::Win
    } else if total < dealer_total {
        HandOutcome::Lose
    } else {
        HandOutcome::Push
    }
}

/// The dealer, playing to fixed house rules.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
    hit_soft_17: bool,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new(hit_soft_17: bool) -> Self {
        Self {
            hand: Hand::new(0.0),
            hit_soft_17,
        }
    }

    /// Returns whether the dealer hits soft 17.
    #[must_use]
    pub const fn hits_soft_17(&self) -> bool {
        self.hit_soft_17
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the dealer's hand mutably.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Returns the dealer's face-up card (the first one dealt).
    ///
    /// # Errors
    ///
    /// Returns [`DealerError::NoUpcard`] if the dealer holds no cards.
    pub fn upcard(&self) -> Result<Card, DealerError> {
        self.hand.cards().first().copied().ok_or(DealerError::NoUpcard)
    }

    /// Clears the dealer's hand for the next round.
    pub fn reset_hand(&mut self) {
        self.hand.reset();
    }

    /// Draws until the house rule says stand.
    ///
    /// Returns the cards drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs dry.
    pub fn play(&mut self, shoe: &mut Shoe) -> Result<Vec<Card>, ShoeError> {
        let mut drawn = Vec::new();
        while dealer_should_hit(self.hand.value(), self.hit_soft_17) {
            let card = shoe.draw()?;
            self.hand.add_card(card);
            drawn.push(card);
        }
        Ok(drawn)
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dealer(hand={}, hit_soft_17={})", self.hand, self.hit_soft_17)
    }
}

impl Game {
    /// Pays or collects every hand against the dealer's final hand.
    pub(super) fn settle(&mut self, bet_errors: Vec<Option<BetError>>) -> RoundResult {
        let dealer = self.dealer.hand();
        let blackjack_pays = self.options.blackjack_pays;
        let mut player_results = Vec::with_capacity(self.players.len());

        for (player_index, (player, bet_error)) in
            self.players.iter_mut().zip(bet_errors).enumerate()
        {
            let mut hand_results = Vec::with_capacity(player.hands().len());
            let mut total_bet = 0.0;
            let mut total_payout = 0.0;

            for hand_index in 0..player.hands().len() {
                let hand = &player.hands()[hand_index];
                let bet = hand.bet();
                let player_value = hand.total();
                let cards = hand.len();
                let outcome = hand_outcome(hand, dealer);

                let payout = match outcome {
                    HandOutcome::Lose => {
                        player.lose(hand_index);
                        0.0
                    }
                    HandOutcome::Blackjack => player.win(hand_index, blackjack_pays),
                    HandOutcome::Win => player.win(hand_index, 1.0),
                    HandOutcome::Push => player.push(hand_index),
                };
                debug!(
                    player = player.name(),
                    hand_index,
                    ?outcome,
                    bet,
                    payout,
                    bankroll = player.bankroll(),
                    "settled"
                );

                total_bet += bet;
                total_payout += payout;
                hand_results.push(HandResult {
                    hand_index,
                    outcome,
                    bet,
                    payout,
                    player_value,
                    cards,
                });
            }

            player_results.push(PlayerResult {
                player_index,
                name: player.name().into(),
                bet_error,
                hands: hand_results,
                total_bet,
                total_payout,
                net: total_payout - total_bet,
                bankroll: player.bankroll(),
            });
        }

        RoundResult {
            players: player_results,
            dealer_value: dealer.total(),
            dealer_bust: dealer.is_bust(),
            dealer_blackjack: dealer.is_blackjack(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn hand(ranks: &[u8]) -> Hand {
        let mut hand = Hand::new(10.0);
        for &rank in ranks {
            hand.add_card(Card::new(Suit::Hearts, rank).unwrap());
        }
        hand
    }

    #[test]
    fn upcard_requires_a_card() {
        let mut dealer = Dealer::new(true);
        assert_eq!(dealer.upcard(), Err(DealerError::NoUpcard));

        let king = Card::new(Suit::Spades, 13).unwrap();
        dealer.hand_mut().add_cards(&[king, Card::new(Suit::Hearts, 5).unwrap()]);
        assert_eq!(dealer.upcard(), Ok(king));

        dealer.reset_hand();
        assert!(dealer.hand().is_empty());
    }

    #[test]
    fn policy_thresholds() {
        assert!(dealer_should_hit(hand(&[10, 6]).value(), false));
        assert!(!dealer_should_hit(hand(&[10, 7]).value(), true));
        assert!(!dealer_should_hit(hand(&[1, 6]).value(), false));
        assert!(dealer_should_hit(hand(&[1, 6]).value(), true));
        assert!(!dealer_should_hit(hand(&[1, 7]).value(), true));
        assert!(!dealer_should_hit(hand(&[1, 6, 10]).value(), true));
    }

    #[test]
    fn play_from_empty_hand_reaches_hard_seventeen() {
        let mut shoe = Shoe::new(1, false, 0.75, 0).unwrap();
        let mut dealer = Dealer::new(false);
        let drawn = dealer.play(&mut shoe).unwrap();
        let values: Vec<u8> = drawn.iter().map(Card::value).collect();
        assert_eq!(values, [2, 3, 4, 5, 6]);
        assert_eq!(dealer.hand().total(), 20);
        assert!(!dealer.hand().is_soft());
    }

    #[test]
    fn stands_on_soft_seventeen_when_configured() {
        let mut shoe = Shoe::new(1, false, 0.75, 0).unwrap();
        let mut dealer = Dealer::new(false);
        dealer.hand_mut().add_cards(&[
            Card::new(Suit::Clubs, 1).unwrap(),
            Card::new(Suit::Diamonds, 6).unwrap(),
        ]);
        assert!(dealer.play(&mut shoe).unwrap().is_empty());
        assert_eq!(dealer.hand().len(), 2);
    }

    #[test]
    fn hits_soft_seventeen_once() {
        let mut shoe = Shoe::new(1, false, 0.75, 0).unwrap();
        let mut dealer = Dealer::new(true);
        dealer.hand_mut().add_cards(&[
            Card::new(Suit::Clubs, 1).unwrap(),
            Card::new(Suit::Diamonds, 6).unwrap(),
        ]);
        let drawn = dealer.play(&mut shoe).unwrap();
        assert_eq!(drawn, [Card::new(Suit::Hearts, 2).unwrap()]);
        assert_eq!(dealer.hand().len(), 3);
        assert_eq!(dealer.hand().total(), 19);
    }

    #[test]
    fn outcome_precedence() {
        let bust = hand(&[10, 10, 5]);
        let natural = hand(&[1, 13]);
        let twenty = hand(&[10, 10]);
        let eighteen = hand(&[10, 8]);

        assert_eq!(hand_outcome(&bust, &hand(&[10, 6, 9])), HandOutcome::Lose);
        assert_eq!(hand_outcome(&natural, &twenty), HandOutcome::Blackjack);
        assert_eq!(hand_outcome(&natural, &hand(&[1, 12])), HandOutcome::Push);
        assert_eq!(hand_outcome(&natural, &hand(&[7, 7, 7])), HandOutcome::Blackjack);
        assert_eq!(hand_outcome(&eighteen, &hand(&[10, 6, 9])), HandOutcome::Win);
        assert_eq!(hand_outcome(&twenty, &eighteen), HandOutcome::Win);
        assert_eq!(hand_outcome(&eighteen, &twenty), HandOutcome::Lose);
        assert_eq!(hand_outcome(&eighteen, &hand(&[9, 9])), HandOutcome::Push);
        // Three-card 21 against a dealer natural ties on total.
        assert_eq!(hand_outcome(&hand(&[7, 7, 7]), &natural), HandOutcome::Push);
    }

    #[test]
    fn display_shows_hand_and_rule() {
        let mut dealer = Dealer::new(true);
        dealer.hand_mut().add_cards(&[
            Card::new(Suit::Spades, 10).unwrap(),
            Card::new(Suit::Diamonds, 7).unwrap(),
        ]);
        assert_eq!(
            alloc::string::ToString::to_string(&dealer),
            "Dealer(hand=10♠, 7♦ (Hard 17), hit_soft_17=true)"
        );
    }
}
