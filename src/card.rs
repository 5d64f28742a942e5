//! Card types and deck utilities.

use core::fmt;

use crate::error::CardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    const fn symbol(self) -> char {
        match self {
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
            Self::Spades => '♠',
        }
    }
}

/// Rank of an ace.
pub const ACE: u8 = 1;

/// Ranks in fresh-deck order: 2 through 10, J, Q, K, then A.
pub const RANK_ORDER: [u8; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, ACE];

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// A playing card.
///
/// Cards are immutable values; equality is by `(rank, suit)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// The rank uses 1 for an ace, 2 through 10 for numerals and 11, 12, 13
    /// for jack, queen and king.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if `rank` is outside `1..=13`.
    pub const fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if rank == 0 || rank > 13 {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == ACE
    }

    /// Base blackjack value: numerals at face value, court cards 10, ace 1.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self.rank {
            11..=13 => 10,
            rank => rank,
        }
    }

    /// Value of the card when shown as the dealer's upcard (ace = 11).
    #[must_use]
    pub const fn upcard_value(&self) -> u8 {
        if self.is_ace() { 11 } else { self.value() }
    }

    /// Builds one standard 52-card deck in fresh-deck order.
    pub fn deck() -> impl Iterator<Item = Self> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| RANK_ORDER.into_iter().map(move |rank| Self { suit, rank }))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.suit.symbol();
        match self.rank {
            ACE => write!(f, "A{symbol}"),
            11 => write!(f, "J{symbol}"),
            12 => write!(f, "Q{symbol}"),
            13 => write!(f, "K{symbol}"),
            rank => write!(f, "{rank}{symbol}"),
        }
    }
}
