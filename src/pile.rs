//! Pile identifiers for the five pile groups of a Klondike layout.
//!
//! A pile is named by a tagged variant carrying its index where one
//! applies, and `Game::pile` resolves the concrete card sequence by
//! case.

use core::fmt;

/// Number of foundation piles (one per suit sequence).
pub const NUM_FOUNDATIONS: usize = 4;
/// Number of tableau piles in the standard Klondike deal.
pub const NUM_TABLEAU: usize = 7;
/// Cards left over for the stock after dealing the tableau (52 - 28).
pub const STOCK_AFTER_DEAL: usize = 24;

/// Identifies one of the piles in a game.
///
/// `Foundation` and `Tableau` carry a pile index; an out-of-range index
/// does not name a pile and is rejected by every operation that takes a
/// `PileId` (treated as an invalid move, never a panic).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PileId {
    Stock,
    Waste,
    Foundation(usize),
    Tableau(usize),
}

impl PileId {
    /// Whether the identifier names an actual pile (indices in range).
    #[inline]
    pub fn is_valid(self) -> bool {
        match self {
            PileId::Stock | PileId::Waste => true,
            PileId::Foundation(i) => i < NUM_FOUNDATIONS,
            PileId::Tableau(i) => i < NUM_TABLEAU,
        }
    }

    /// Whether multi-card runs may be taken from this pile. Only tableau
    /// piles allow picking up more than the top card.
    #[inline]
    pub fn allows_runs(self) -> bool {
        matches!(self, PileId::Tableau(_))
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "stock"),
            PileId::Waste => write!(f, "waste"),
            PileId::Foundation(i) => write!(f, "foundation {}", i + 1),
            PileId::Tableau(i) => write!(f, "tableau {}", i + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_ranges() {
        assert!(PileId::Stock.is_valid());
        assert!(PileId::Waste.is_valid());
        assert!(PileId::Foundation(0).is_valid());
        assert!(PileId::Foundation(3).is_valid());
        assert!(!PileId::Foundation(4).is_valid());
        assert!(PileId::Tableau(6).is_valid());
        assert!(!PileId::Tableau(7).is_valid());
    }

    #[test]
    fn only_tableau_allows_runs() {
        assert!(PileId::Tableau(0).allows_runs());
        assert!(!PileId::Waste.allows_runs());
        assert!(!PileId::Foundation(0).allows_runs());
        assert!(!PileId::Stock.allows_runs());
    }
}
