use alloc::vec::Vec;

use tracing::{trace, warn};

use crate::error::{BetError, ShoeError};
use crate::hand::Hand;

use super::Game;

impl Game {
    /// Clears every player's hands and takes `amount` from each.
    ///
    /// Returns, per seat, the reason a wager was refused. A refused player
    /// gets no hand and sits the round out.
    pub(super) fn place_bets(&mut self, amount: f64) -> Vec<Option<BetError>> {
        self.players
            .iter_mut()
            .map(|player| {
                player.reset_hands();
                match player.place_bet(amount) {
                    Ok(()) => {
                        player.add_hand(Hand::new(amount));
                        None
                    }
                    Err(err) => {
                        warn!(player = player.name(), amount, %err, "bet rejected, sitting out");
                        Some(err)
                    }
                }
            })
            .collect()
    }

    /// Deals two cards to every seated hand and to the dealer, one card per
    /// recipient per pass, players first.
    pub(super) fn deal(&mut self) -> Result<(), ShoeError> {
        for _ in 0..2 {
            for player in &mut self.players {
                if player.hands().is_empty() {
                    continue;
                }
                let card = self.shoe.draw()?;
                trace!(player = player.name(), %card, "dealt");
                if let Some(hand) = player.hands_mut().first_mut() {
                    hand.add_card(card);
                }
            }

            let card = self.shoe.draw()?;
            self.dealer.hand_mut().add_card(card);
        }
        Ok(())
    }
}
