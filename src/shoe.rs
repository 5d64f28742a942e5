//! The dealer's shoe: several decks drawn in order with penetration-based
//! rebuilding.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE};
use crate::error::{ConfigError, ShoeError};

/// Smallest number of decks a shoe may hold.
pub const MIN_DECKS: u8 = 1;
/// Largest number of decks a shoe may hold.
pub const MAX_DECKS: u8 = 8;

#[cfg(feature = "std")]
fn floor(value: f64) -> f64 {
    value.floor()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn floor(value: f64) -> f64 {
    libm::floor(value)
}

/// Checks a deck count and penetration threshold.
///
/// # Errors
///
/// Returns an error if `decks` is outside `1..=8` or `penetration` is not
/// strictly between 0 and 1.
pub fn validate(decks: u8, penetration: f64) -> Result<(), ConfigError> {
    if !(MIN_DECKS..=MAX_DECKS).contains(&decks) {
        return Err(ConfigError::InvalidDeckCount(decks));
    }
    if !(penetration > 0.0 && penetration < 1.0) {
        return Err(ConfigError::InvalidPenetration(penetration));
    }
    Ok(())
}

/// A shoe of `N` standard decks.
///
/// Cards are served from the front of the current sequence. Once the number of
/// remaining cards falls to the cutoff, the next draw first restores the full
/// original composition (reshuffling it when the shoe was built to shuffle)
/// and then serves from the rebuilt sequence.
#[derive(Debug, Clone)]
pub struct Shoe {
    decks: u8,
    /// Current sequence, stored back to front so the next card is `last()`.
    cards: Vec<Card>,
    cutoff: usize,
    shuffle_on_reset: bool,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shoe with the given number of decks.
    ///
    /// The cutoff is `floor(total_cards * (1 - penetration))` and is fixed
    /// for the lifetime of the shoe.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck count or penetration is out of range.
    pub fn new(decks: u8, shuffle: bool, penetration: f64, seed: u64) -> Result<Self, ConfigError> {
        validate(decks, penetration)?;

        let total = usize::from(decks) * DECK_SIZE;
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let cutoff = floor(total as f64 * (1.0 - penetration)) as usize;

        let mut shoe = Self {
            decks,
            cards: Vec::with_capacity(total),
            cutoff,
            shuffle_on_reset: shuffle,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reset(shuffle);
        Ok(shoe)
    }

    /// Restores the shoe to its full original composition, shuffling it if
    /// requested. Without a shuffle the fresh-deck order is restored.
    pub fn reset(&mut self, shuffle: bool) {
        self.cards.clear();
        for _ in 0..self.decks {
            self.cards.extend(Card::deck());
        }
        self.cards.reverse();

        if shuffle {
            self.shuffle();
        }
    }

    /// Shuffles the remaining cards with a uniform random permutation.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Draws the next card, rebuilding the shoe first if the cutoff has been
    /// reached.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Empty`] if no card is available even after the
    /// rebuild.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        if self.cards.len() <= self.cutoff {
            debug!(
                remaining = self.cards.len(),
                cutoff = self.cutoff,
                "penetration reached, rebuilding shoe"
            );
            self.reset(self.shuffle_on_reset);
        }
        self.cards.pop().ok_or(ShoeError::Empty)
    }

    /// Returns the number of cards left to draw.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of remaining cards at which the next draw rebuilds.
    #[must_use]
    pub const fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Returns the number of decks in the shoe.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }

    /// Returns the number of cards in a full shoe.
    #[must_use]
    pub fn capacity(&self) -> usize {
        usize::from(self.decks) * DECK_SIZE
    }

    /// Returns the next `n` cards in draw order without removing them.
    pub fn peek(&self, n: usize) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev().take(n)
    }

    /// Places `cards` at the front of the draw order, first card drawn first.
    ///
    /// Intended for stacking a known sequence in tests and replays.
    pub fn place_on_top(&mut self, cards: &[Card]) {
        self.cards.extend(cards.iter().rev().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn two_of_hearts() -> Card {
        Card::new(Suit::Hearts, 2).unwrap()
    }

    #[test]
    fn rejects_invalid_configuration() {
        assert_eq!(
            Shoe::new(0, false, 0.75, 1).unwrap_err(),
            ConfigError::InvalidDeckCount(0)
        );
        assert_eq!(
            Shoe::new(9, false, 0.75, 1).unwrap_err(),
            ConfigError::InvalidDeckCount(9)
        );
        for penetration in [-0.1, 0.0, 1.0, 1.1, f64::NAN] {
            assert!(matches!(
                Shoe::new(6, false, penetration, 1),
                Err(ConfigError::InvalidPenetration(_))
            ));
        }
    }

    #[test]
    fn unshuffled_shoe_draws_in_fresh_deck_order() {
        let mut shoe = Shoe::new(2, false, 0.5, 1).unwrap();
        assert_eq!(shoe.remaining(), 104);
        assert_eq!(shoe.draw().unwrap(), two_of_hearts());
        assert_eq!(shoe.draw().unwrap(), Card::new(Suit::Hearts, 3).unwrap());
        assert_eq!(shoe.remaining(), 102);
    }

    #[test]
    fn reset_restores_full_composition() {
        let mut shoe = Shoe::new(1, false, 0.5, 1).unwrap();
        shoe.draw().unwrap();
        assert_eq!(shoe.remaining(), 51);
        shoe.reset(false);
        assert_eq!(shoe.remaining(), DECK_SIZE);
        assert_eq!(shoe.draw().unwrap(), two_of_hearts());
    }

    #[test]
    fn shuffle_keeps_composition() {
        let mut shoe = Shoe::new(1, true, 0.5, 7).unwrap();
        let mut drawn: Vec<Card> = shoe.peek(DECK_SIZE).copied().collect();
        let mut fresh: Vec<Card> = Card::deck().collect();
        assert_ne!(drawn, fresh);

        let key = |c: &Card| (c.suit() as u8, c.rank());
        drawn.sort_by_key(key);
        fresh.sort_by_key(key);
        assert_eq!(drawn, fresh);
    }

    #[test]
    fn same_seed_same_order() {
        let a = Shoe::new(6, true, 0.75, 99).unwrap();
        let b = Shoe::new(6, true, 0.75, 99).unwrap();
        assert!(a.peek(312).eq(b.peek(312)));
    }

    #[test]
    fn draw_at_cutoff_rebuilds_before_serving() {
        let penetration = 47.0 / 52.0;
        let mut shoe = Shoe::new(1, false, penetration, 1).unwrap();
        let cutoff = shoe.cutoff();

        for _ in 0..DECK_SIZE - cutoff {
            shoe.draw().unwrap();
        }
        assert_eq!(shoe.remaining(), cutoff);

        assert_eq!(shoe.draw().unwrap(), two_of_hearts());
        assert_eq!(shoe.remaining(), DECK_SIZE - 1);
    }

    #[test]
    fn cutoff_is_fixed_at_construction() {
        let mut shoe = Shoe::new(8, true, 0.75, 3).unwrap();
        assert_eq!(shoe.cutoff(), 104);
        shoe.reset(true);
        assert_eq!(shoe.cutoff(), 104);
        assert_eq!(shoe.capacity(), 416);
    }

    #[test]
    fn stacked_cards_come_out_first() {
        let mut shoe = Shoe::new(1, true, 0.5, 5).unwrap();
        let ace = Card::new(Suit::Spades, 1).unwrap();
        let king = Card::new(Suit::Clubs, 13).unwrap();
        shoe.place_on_top(&[ace, king]);
        assert_eq!(shoe.remaining(), DECK_SIZE + 2);
        assert_eq!(shoe.draw().unwrap(), ace);
        assert_eq!(shoe.draw().unwrap(), king);
    }
}
