use tracing::{debug, trace};

use crate::error::{ActionError, RoundError};
use crate::hand::Hand;
use crate::strategy::{Action, Allowed};

use super::{Game, TurnPosition};

impl Game {
    /// Plays every hand of every player in seat order.
    ///
    /// Splits insert the second hand right after the current one, so the
    /// hand list can grow while it is being walked.
    pub(super) fn play_player_turns(&mut self, dealer_upcard: u8) -> Result<(), RoundError> {
        for player_index in 0..self.players.len() {
            let mut splits: u8 = 0;
            let mut hand_index = 0;
            while hand_index < self.players[player_index].hands().len() {
                let position = TurnPosition {
                    player_index,
                    hand_index,
                };
                self.play_hand(position, dealer_upcard, &mut splits)?;
                hand_index += 1;
            }
        }
        Ok(())
    }

    /// Asks the strategy for actions on one hand until it stops.
    ///
    /// A hand at 21 or more stops without asking. After a split the first new
    /// hand takes the current slot and is played next, so it may be split or
    /// doubled again. When the bankroll cannot back a double or split, that
    /// action is withdrawn for the rest of the hand and the strategy is asked
    /// again.
    fn play_hand(
        &mut self,
        position: TurnPosition,
        dealer_upcard: u8,
        splits: &mut u8,
    ) -> Result<(), RoundError> {
        let TurnPosition {
            player_index,
            hand_index,
        } = position;
        let mut allowed = Allowed::ALL;

        loop {
            let Some((hand, strategy)) =
                self.players[player_index].hand_with_strategy(hand_index)
            else {
                return Ok(());
            };
            if hand.total() >= 21 {
                trace!(player_index, hand_index, %hand, "auto-stand");
                return Ok(());
            }

            let action = strategy.decide_with(hand, dealer_upcard, allowed)?;
            trace!(player_index, hand_index, ?action, ?allowed, "decision");
            if !allowed.permits(action) {
                return Err(RoundError::IllegalAction {
                    position,
                    source: ActionError::NotOffered(action),
                });
            }

            match action {
                Action::Hit => self.hit(position)?,
                Action::Stand => return Ok(()),
                Action::DoubleDown => {
                    if self.double_down(position)? {
                        return Ok(());
                    }
                    allowed = allowed.without(Action::DoubleDown);
                }
                Action::Split => {
                    if !self.split(position, splits)? {
                        allowed = allowed.without(Action::Split);
                    }
                }
            }
        }
    }

    fn hit(&mut self, position: TurnPosition) -> Result<(), RoundError> {
        let card = self.shoe.draw()?;
        if let Some(hand) = self.hand_mut(position) {
            hand.add_card(card);
        }
        Ok(())
    }

    /// Doubles the stake and draws one card.
    ///
    /// Returns `false`, leaving the hand untouched, if the bankroll cannot
    /// cover the extra wager.
    fn double_down(&mut self, position: TurnPosition) -> Result<bool, RoundError> {
        let player = &mut self.players[position.player_index];
        let Some(hand) = player.hands().get(position.hand_index) else {
            return Ok(true);
        };
        if hand.len() != 2 {
            return Err(RoundError::IllegalAction {
                position,
                source: ActionError::CannotDouble(hand.len()),
            });
        }

        let stake = hand.bet();
        if let Err(err) = player.place_bet(stake) {
            debug!(player = player.name(), %err, "cannot fund double down");
            return Ok(false);
        }

        let card = self.shoe.draw()?;
        if let Some(hand) = self.hand_mut(position) {
            hand.raise_bet(stake);
            hand.add_card(card);
        }
        Ok(true)
    }

    /// Replaces a pair with two hands, each holding one card of the pair and
    /// one fresh card, both carrying the original stake.
    ///
    /// Returns `false`, leaving the pair untouched, if the split was refused
    /// for funds or the split limit.
    fn split(&mut self, position: TurnPosition, splits: &mut u8) -> Result<bool, RoundError> {
        let max_splits = self.options.max_splits;
        let player = &mut self.players[position.player_index];
        let Some(hand) = player.hands().get(position.hand_index) else {
            return Ok(false);
        };
        let &[first, second] = hand.cards() else {
            return Err(RoundError::IllegalAction {
                position,
                source: ActionError::CannotSplit,
            });
        };
        if first.rank() != second.rank() {
            return Err(RoundError::IllegalAction {
                position,
                source: ActionError::CannotSplit,
            });
        }

        if max_splits.is_some_and(|max| *splits >= max) {
            debug!(player = player.name(), splits = *splits, "split limit reached");
            return Ok(false);
        }

        let stake = hand.bet();
        if let Err(err) = player.place_bet(stake) {
            debug!(player = player.name(), %err, "cannot fund split");
            return Ok(false);
        }

        let first_draw = self.shoe.draw()?;
        let second_draw = self.shoe.draw()?;

        let hands = self.players[position.player_index].hands_mut();
        hands[position.hand_index] = Hand::with_cards(&[first, first_draw], stake);
        hands.insert(
            position.hand_index + 1,
            Hand::with_cards(&[second, second_draw], stake),
        );
        *splits += 1;
        Ok(true)
    }

    fn hand_mut(&mut self, position: TurnPosition) -> Option<&mut Hand> {
        self.players
            .get_mut(position.player_index)?
            .hands_mut()
            .get_mut(position.hand_index)
    }
}
