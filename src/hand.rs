//! Hand representation and valuation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Whether a total counts an ace as 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandKind {
    /// No ace is counted as 11.
    Hard,
    /// Exactly one ace is counted as 11.
    Soft,
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hard => "Hard",
            Self::Soft => "Soft",
        })
    }
}

/// Best total of a hand and whether it is soft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandValue {
    /// Hand total.
    pub total: u8,
    /// Hard or soft.
    pub kind: HandKind,
}

impl HandValue {
    /// Returns whether the total is soft.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(self.kind, HandKind::Soft)
    }
}

/// Values a sequence of cards.
///
/// Aces count as 1; if the hand holds at least one ace and adding 10 does not
/// exceed 21, a single ace is promoted to 11 and the total is soft. No more
/// than one ace is ever promoted.
#[must_use]
pub fn evaluate(cards: &[Card]) -> HandValue {
    let mut total: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.is_ace();
        total = total.saturating_add(card.value());
    }

    if has_ace && total <= 11 {
        HandValue {
            total: total + 10,
            kind: HandKind::Soft,
        }
    } else {
        HandValue {
            total,
            kind: HandKind::Hard,
        }
    }
}

/// A hand of cards together with the stake riding on it.
///
/// The value is always derived from the current cards and never cached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hand {
    cards: Vec<Card>,
    bet: f64,
}

impl Hand {
    /// Creates a new empty hand with the given stake.
    #[must_use]
    pub const fn new(bet: f64) -> Self {
        Self {
            cards: Vec::new(),
            bet,
        }
    }

    /// Creates a hand from the given cards and stake.
    #[must_use]
    pub fn with_cards(cards: &[Card], bet: f64) -> Self {
        Self {
            cards: cards.to_vec(),
            bet,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds several cards to the hand.
    pub fn add_cards(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
    }

    /// Removes all cards from the hand.
    pub fn reset(&mut self) {
        self.cards.clear();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the stake riding on this hand.
    #[must_use]
    pub const fn bet(&self) -> f64 {
        self.bet
    }

    /// Adds to the stake (doubling down).
    pub fn raise_bet(&mut self, amount: f64) {
        self.bet += amount;
    }

    /// Returns the best total and whether it is soft.
    #[must_use]
    pub fn value(&self) -> HandValue {
        evaluate(&self.cards)
    }

    /// Returns the best total.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.value().total
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.value().is_soft()
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total() == 21
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Returns whether the hand is a two-card pair of identical rank.
    ///
    /// Equal value is not enough: a ten and a jack cannot be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank() == b.rank())
    }

    /// Settles the hand as a win, returning `stake * (1 + multiplier)`.
    ///
    /// The stake is zeroed.
    pub fn win(&mut self, multiplier: f64) -> f64 {
        let payout = self.bet * (1.0 + multiplier);
        self.bet = 0.0;
        payout
    }

    /// Settles the hand as a loss. The stake was already debited at bet time.
    pub const fn lose(&mut self) {
        self.bet = 0.0;
    }

    /// Settles the hand as a push, returning the stake.
    pub const fn push(&mut self) -> f64 {
        let payout = self.bet;
        self.bet = 0.0;
        payout
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        let value = self.value();
        write!(f, " ({} {})", value.kind, value.total)
    }
}
