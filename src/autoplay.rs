//! End-game automation: detecting and playing out a finished game.
//!
//! Once every tableau card is face-up and the stock is empty, the rest
//! of the game is forced and can be played automatically. Instead of a
//! sleep-between-moves loop, `auto_complete` hands the host an iterator
//! that applies exactly one tableau-top to foundation move per `next()`
//! call; the host pulls steps at whatever pace its rendering wants.
//!
//! The scan deliberately never considers the waste. A game whose last
//! winning cards sit in the waste reports `can_auto_complete() == false`
//! even though it is winnable by hand; that is a known product decision,
//! not an oversight.

use log::{debug, trace};

use crate::card::Card;
use crate::game::Game;
use crate::pile::{PileId, NUM_FOUNDATIONS, NUM_TABLEAU};

/// One applied auto-complete move, for the host to render.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AutoStep {
    pub card: Card,
    pub from_tableau: usize,
    pub to_foundation: usize,
}

impl Game {
    /// First legal tableau-top to foundation move, scanning tableau
    /// piles 0..6 and foundations 0..3 in index order.
    fn next_foundation_move(&self) -> Option<(usize, usize, Card)> {
        for t in 0..NUM_TABLEAU {
            let Some(&top) = self.tableau[t].last() else {
                continue;
            };
            for f in 0..NUM_FOUNDATIONS {
                if self.is_valid_move(&[top], PileId::Foundation(f)) {
                    return Some((t, f, top));
                }
            }
        }
        None
    }

    /// Whether the end-game automation may run: every tableau card is
    /// face-up, the stock is empty, and at least one tableau-top to
    /// foundation move exists right now.
    pub fn can_auto_complete(&self) -> bool {
        self.tableau.iter().flatten().all(|c| c.face_up)
            && self.stock.is_empty()
            && self.next_foundation_move().is_some()
    }

    /// An iterator that plays the forced end-game one move per step.
    ///
    /// Each `next()` applies a single move and yields it; it returns
    /// `None` once the game is won or no further move is available.
    /// Dropping the iterator early simply stops the automation.
    pub fn auto_complete(&mut self) -> AutoComplete<'_> {
        AutoComplete { game: self }
    }
}

/// Step-wise auto-complete over a mutably borrowed game. See
/// [`Game::auto_complete`].
pub struct AutoComplete<'a> {
    game: &'a mut Game,
}

impl Iterator for AutoComplete<'_> {
    type Item = AutoStep;

    fn next(&mut self) -> Option<AutoStep> {
        if self.game.check_win() || !self.game.can_auto_complete() {
            return None;
        }
        let (t, f, card) = self.game.next_foundation_move()?;

        // All tableau cards are face-up here, so popping the top card
        // never uncovers a hidden one.
        let moved = self.game.tableau[t]
            .pop()
            .expect("scan found a top card on this pile");
        self.game.foundations[f].push(moved);
        self.game.record_move();

        trace!("auto-complete: {} from tableau {} to foundation {}", card, t + 1, f + 1);
        if self.game.check_win() {
            debug!("auto-complete finished the game in {} moves", self.game.move_count());
        }

        Some(AutoStep {
            card,
            from_tableau: t,
            to_foundation: f,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn empty_game() -> Game {
        Game {
            stock: Vec::new(),
            waste: Vec::new(),
            foundations: Default::default(),
            tableau: Default::default(),
            moves: 0,
            elapsed_secs: 0,
            started: false,
        }
    }

    /// Fill each foundation with its suit's ranks up to and including
    /// `through`.
    fn fill_foundations(game: &mut Game, through: Rank) {
        for (f, &suit) in game.foundations.iter_mut().zip(Suit::ALL.iter()) {
            *f = Rank::ALL
                .iter()
                .take_while(|&&r| r <= through)
                .map(|&r| Card::face_up(suit, r))
                .collect();
        }
    }

    #[test]
    fn blocked_by_a_face_down_tableau_card() {
        let mut game = empty_game();
        fill_foundations(&mut game, Rank::Queen);
        game.tableau[0].push(Card::face_up(Suit::Hearts, Rank::King));
        game.tableau[1].push(Card::new(Suit::Spades, Rank::King)); // face-down

        assert!(!game.can_auto_complete());
    }

    #[test]
    fn blocked_by_a_non_empty_stock() {
        let mut game = empty_game();
        fill_foundations(&mut game, Rank::Queen);
        game.tableau[0].push(Card::face_up(Suit::Hearts, Rank::King));
        game.stock.push(Card::new(Suit::Spades, Rank::King));

        assert!(!game.can_auto_complete());
    }

    #[test]
    fn requires_an_available_foundation_move() {
        let mut game = empty_game();
        fill_foundations(&mut game, Rank::Ten);
        // A queen is not playable while the jacks are still buried.
        game.tableau[0].push(Card::face_up(Suit::Hearts, Rank::Queen));

        assert!(!game.can_auto_complete());

        game.tableau[1].push(Card::face_up(Suit::Hearts, Rank::Jack));
        assert!(game.can_auto_complete());
    }

    /// Winning cards stuck in the waste are invisible to the scan; the
    /// game stays "not auto-completable" even though it is winnable by
    /// hand. Intentional product decision.
    #[test]
    fn never_looks_at_the_waste() {
        let mut game = empty_game();
        fill_foundations(&mut game, Rank::Queen);
        for &suit in Suit::ALL.iter() {
            game.waste.push(Card::face_up(suit, Rank::King));
        }

        assert!(!game.can_auto_complete());
        assert!(game.auto_complete().next().is_none());
        assert!(!game.check_win());
    }

    #[test]
    fn scans_tableau_piles_in_index_order() {
        let mut game = empty_game();
        fill_foundations(&mut game, Rank::Ten);
        // Both jacks are playable; the lower pile index goes first.
        game.tableau[2].push(Card::face_up(Suit::Hearts, Rank::Jack));
        game.tableau[5].push(Card::face_up(Suit::Clubs, Rank::Jack));

        let step = game.auto_complete().next().expect("a move exists");
        assert_eq!(step.from_tableau, 2);
        assert_eq!((step.card.suit, step.card.rank), (Suit::Hearts, Rank::Jack));
    }

    #[test]
    fn an_ace_goes_to_the_first_empty_foundation() {
        let mut game = empty_game();
        game.tableau[0].push(Card::face_up(Suit::Spades, Rank::Ace));

        let step = game.auto_complete().next().expect("ace is playable");
        assert_eq!(step.to_foundation, 0);
        assert_eq!(game.foundation(0).unwrap().len(), 1);
    }

    #[test]
    fn plays_a_forced_endgame_to_the_win_and_halts() {
        let mut game = empty_game();
        fill_foundations(&mut game, Rank::Ten);
        // Each pile holds one suit's J/Q/K with the jack on top.
        for (t, &suit) in Suit::ALL.iter().enumerate() {
            game.tableau[t].push(Card::face_up(suit, Rank::King));
            game.tableau[t].push(Card::face_up(suit, Rank::Queen));
            game.tableau[t].push(Card::face_up(suit, Rank::Jack));
        }
        assert!(game.can_auto_complete());

        let steps: Vec<AutoStep> = game.auto_complete().collect();
        assert_eq!(steps.len(), 12, "three cards per suit remained");
        assert!(game.check_win());
        assert_eq!(game.move_count(), 12, "each step is one move");
        assert!(game.tableau.iter().all(Vec::is_empty));

        // Once won, further steps are refused.
        assert!(game.auto_complete().next().is_none());
    }
}
