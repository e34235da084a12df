//! Card, Suit, and Rank types for a standard 52-card deck.
//!
//! - `Card` pairs an immutable (suit, rank) identity with a mutable
//!   `face_up` flag.
//! - `Suit` and `Rank` give human-readable structure on top of that,
//!   with `Rank::value()` providing the 1..=13 ordering used by the
//!   move rules.

use core::fmt;

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

/// The four suits in a standard deck.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
}

/// Red or black, as used by the tableau stacking rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Black,
}

/// The thirteen ranks in a standard deck.
///
/// Ace is the lowest rank here; use `value()` to get 1..=13 for
/// sequencing comparisons (Ace=1, King=13).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King, // 12
}

/// A playing card: fixed (suit, rank) identity plus a face-up flag.
///
/// Exactly one card exists per (suit, rank) pair across a whole game;
/// the deal and the move operations preserve that by only ever moving
/// cards between piles, never duplicating them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_up: bool,
}

impl Card {
    /// Create a new face-down card.
    #[inline]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a new face-up card. Mostly useful in tests and when
    /// building piles by hand.
    #[inline]
    pub fn face_up(suit: Suit, rank: Rank) -> Self {
        Card {
            suit,
            rank,
            face_up: true,
        }
    }

    /// Rank value in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn value(self) -> u8 {
        self.rank.value()
    }

    /// The card's color (red for hearts/diamonds, black for clubs/spades).
    #[inline]
    pub fn color(self) -> Color {
        self.suit.color()
    }

    /// Short string like "AH", "7C", "TD", "KS". Ignores the face-up
    /// flag; callers that must hide face-down cards mask it themselves
    /// (see `display`).
    pub fn short_str(self) -> String {
        format!("{}{}", self.rank.short_char(), self.suit.short_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_str())
    }
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    pub const ALL: [Suit; NUM_SUITS as usize] = [
        Suit::Hearts,
        Suit::Diamonds,
        Suit::Clubs,
        Suit::Spades,
    ];

    /// The suit's color.
    #[inline]
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-character representation: 'H', 'D', 'C', or 'S'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Rank value in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Single-character representation ('A', '2'..'9', 'T', 'J', 'Q', 'K').
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

/// Helper for tableau rules: can `upper` be placed on `lower`?
///
/// In Klondike, this is true if:
/// - `upper` is exactly one rank lower than `lower`, and
/// - `upper` is opposite color from `lower`.
#[inline]
pub fn is_one_lower_opposite_color(upper: Card, lower: Card) -> bool {
    upper.value() + 1 == lower.value() && upper.color() != lower.color()
}
