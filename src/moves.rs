//! Move validation and application.
//!
//! A move takes a contiguous run of cards from the tail of one pile and
//! appends it to another. Validation only ever inspects the run's first
//! card against the target: run-internal ordering is guaranteed by
//! construction, since a multi-card run can only be picked up from an
//! already-valid tableau sequence.
//!
//! Nothing here faults: malformed candidates (empty run, face-down
//! source, out-of-range pile index, stock/waste target) are ordinary
//! rejections and simply return `false`.

use log::debug;

use crate::card::{is_one_lower_opposite_color, Card, Rank};
use crate::game::Game;
use crate::pile::PileId;

/// Where a proposed move takes its cards from: a pile, plus the index of
/// the first card of the run. The run always extends from `index` to the
/// end of the pile.
///
/// Only tableau piles permit `index` below the top; every other pile
/// moves a single (top) card at a time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveSource {
    pub pile: PileId,
    pub index: usize,
}

impl MoveSource {
    /// The run starting at the top of a pile (single-card move).
    pub fn top_of(pile: PileId, pile_len: usize) -> Option<Self> {
        pile_len.checked_sub(1).map(|index| MoveSource { pile, index })
    }
}

impl Game {
    /// Whether the given run of cards may be placed on `target`.
    ///
    /// - Foundation: single card only; Ace on an empty foundation,
    ///   otherwise same suit and exactly one rank above the top card.
    /// - Tableau: a King-headed run on an empty pile, otherwise the run
    ///   head must be opposite color and one rank below the top card.
    /// - Stock and waste are never legal destinations.
    pub fn is_valid_move(&self, cards: &[Card], target: PileId) -> bool {
        let Some(first) = cards.first() else {
            return false;
        };

        match target {
            PileId::Foundation(i) => {
                // Foundations take one card at a time.
                if cards.len() > 1 {
                    return false;
                }
                let Some(foundation) = self.foundation(i) else {
                    return false;
                };
                match foundation.last() {
                    None => first.rank == Rank::Ace,
                    Some(top) => {
                        first.suit == top.suit && first.value() == top.value() + 1
                    }
                }
            }

            PileId::Tableau(i) => {
                let Some(pile) = self.tableau(i) else {
                    return false;
                };
                match pile.last() {
                    None => first.rank == Rank::King,
                    Some(top) => is_one_lower_opposite_color(*first, *top),
                }
            }

            PileId::Stock | PileId::Waste => false,
        }
    }

    /// The run of cards a `MoveSource` designates, if it designates a
    /// structurally movable one: in-range index, face-up first card, and
    /// (outside the tableau) only the top card.
    ///
    /// The stock never sources a move; its cards are face-down, so the
    /// face-up check rejects it along with every other hidden card.
    pub(crate) fn movable_run(&self, source: MoveSource) -> Option<&[Card]> {
        let pile = self.pile(source.pile)?;
        let run = pile.get(source.index..)?;
        let first = run.first()?;
        if !first.face_up {
            return None;
        }
        if !source.pile.allows_runs() && run.len() > 1 {
            return None;
        }
        Some(run)
    }

    /// Validate and, if legal, apply a move. Returns whether the move
    /// was applied; an illegal or malformed candidate leaves the game
    /// untouched.
    ///
    /// On success the run is spliced out of the source, the newly
    /// exposed tableau card (if any) is flipped face-up, the run is
    /// appended to the target in order, and the move counter advances
    /// by one.
    pub fn try_move(&mut self, source: MoveSource, target: PileId) -> bool {
        if source.pile == target {
            return false;
        }
        let Some(run) = self.movable_run(source) else {
            return false;
        };
        let run: Vec<Card> = run.to_vec();
        if !self.is_valid_move(&run, target) {
            return false;
        }

        // Both piles exist: movable_run resolved the source and
        // is_valid_move resolved the target.
        let src = self
            .pile_mut(source.pile)
            .expect("source pile resolved during validation");
        src.truncate(source.index);
        if matches!(source.pile, PileId::Tableau(_)) {
            // Uncovering a hidden card reveals it.
            if let Some(top) = src.last_mut() {
                top.face_up = true;
            }
        }

        let dst = self
            .pile_mut(target)
            .expect("target pile resolved during validation");
        dst.extend(run);

        self.record_move();
        if self.check_win() {
            debug!("game won after {} moves", self.move_count());
        }
        true
    }

    /// Draw the top stock card face-up onto the waste; with an empty
    /// stock, recycle the whole waste back into the stock face-down
    /// instead. Popping card by card reverses the waste exactly back
    /// into the original stock order, so repeated draws cycle through
    /// the same sequence. Both branches count as one move.
    pub fn draw_from_stock(&mut self) {
        if let Some(mut card) = self.stock.pop() {
            card.face_up = true;
            self.waste.push(card);
        } else {
            while let Some(mut card) = self.waste.pop() {
                card.face_up = false;
                self.stock.push(card);
            }
        }
        self.record_move();
    }
}
