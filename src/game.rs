//! Game-level state: the five pile groups plus move/time bookkeeping.
//!
//! `Game` owns all piles and is the single mutation point for a session.
//! The rules themselves live in `moves` (validation/application) and
//! `autoplay` (end-game automation); this module covers construction,
//! the deal, read accessors, win detection, and the advisory clock.

use log::debug;
use rand::Rng;

use crate::card::{Card, CARDS_PER_DECK, NUM_RANKS};
use crate::deck::shuffled_deck;
use crate::pile::{PileId, NUM_FOUNDATIONS, NUM_TABLEAU};

/// Complete state of one Klondike session.
///
/// All piles are `Vec<Card>` with the last element as the top. The move
/// counter advances once per accepted move, draw, or auto-complete step;
/// the elapsed counter advances only through `tick()` and never feeds
/// rule logic.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) stock: Vec<Card>,
    pub(crate) waste: Vec<Card>,
    pub(crate) foundations: [Vec<Card>; NUM_FOUNDATIONS],
    pub(crate) tableau: [Vec<Card>; NUM_TABLEAU],
    pub(crate) moves: u32,
    pub(crate) elapsed_secs: u32,
    pub(crate) started: bool,
}

impl Game {
    /// Deal a fresh game from a deck shuffled with the given generator.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::from_deck(shuffled_deck(rng))
    }

    /// Deal a fresh game from an explicit deck ordering.
    ///
    /// The deck must hold the full 52-card set; replays and scripted
    /// tests use this to pin a layout, normal play goes through `new`.
    /// Face flags on the input cards are ignored and reassigned by the
    /// deal.
    pub fn from_deck(deck: Vec<Card>) -> Self {
        debug_assert_eq!(deck.len(), CARDS_PER_DECK as usize);
        let mut game = Game {
            stock: Vec::new(),
            waste: Vec::new(),
            foundations: Default::default(),
            tableau: Default::default(),
            moves: 0,
            elapsed_secs: 0,
            started: false,
        };
        game.deal(deck);
        game
    }

    /// Discard the current layout and re-deal from a fresh shuffle.
    /// Resets the move and time counters.
    pub fn new_game<R: Rng>(&mut self, rng: &mut R) {
        *self = Game::new(rng);
    }

    /// Standard Klondike deal: tableau pile `j` receives `j + 1` cards,
    /// with only the last one dealt face-up; the remaining 24 cards
    /// become the face-down stock in deck order.
    fn deal(&mut self, deck: Vec<Card>) {
        let mut next = deck.into_iter();

        for i in 0..NUM_TABLEAU {
            for j in i..NUM_TABLEAU {
                let mut card = next.next().expect("deck holds 52 cards");
                card.face_up = j == i;
                self.tableau[j].push(card);
            }
        }
        self.stock.extend(next.map(|mut c| {
            c.face_up = false;
            c
        }));

        debug!(
            "dealt new game: {} stock cards, tableau heights {:?}",
            self.stock.len(),
            self.tableau.iter().map(Vec::len).collect::<Vec<_>>()
        );
    }

    // ----- Read accessors -----

    /// The face-down draw pile.
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    /// The face-up discard pile fed by `draw_from_stock`.
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    /// Foundation pile `index` (0..=3), or `None` if out of range.
    pub fn foundation(&self, index: usize) -> Option<&[Card]> {
        self.foundations.get(index).map(Vec::as_slice)
    }

    /// Tableau pile `index` (0..=6), or `None` if out of range.
    pub fn tableau(&self, index: usize) -> Option<&[Card]> {
        self.tableau.get(index).map(Vec::as_slice)
    }

    /// Resolve a pile identifier to its card sequence.
    ///
    /// Returns `None` for an out-of-range foundation/tableau index, in
    /// line with the reject-don't-fault error model.
    pub fn pile(&self, id: PileId) -> Option<&[Card]> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Foundation(i) => self.foundation(i),
            PileId::Tableau(i) => self.tableau(i),
        }
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> Option<&mut Vec<Card>> {
        match id {
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
            PileId::Foundation(i) => self.foundations.get_mut(i),
            PileId::Tableau(i) => self.tableau.get_mut(i),
        }
    }

    /// Number of accepted moves (including draws and auto-complete steps).
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Seconds of play recorded via `tick()`.
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Whether the first player action has occurred.
    pub fn started(&self) -> bool {
        self.started
    }

    // ----- Bookkeeping shared by the mutating operations -----

    /// Record one accepted player action: bump the move counter and arm
    /// the clock if this was the first action of the game.
    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
        self.started = true;
    }

    /// Advance the elapsed-play clock by one second.
    ///
    /// The host calls this from its own once-per-second tick. Ticks are
    /// ignored before the first player action and after the game is won;
    /// the counter is presentation state only.
    pub fn tick(&mut self) {
        if self.started && !self.check_win() {
            self.elapsed_secs += 1;
        }
    }

    /// True once every foundation holds its full A..K sequence.
    pub fn check_win(&self) -> bool {
        self.foundations
            .iter()
            .all(|f| f.len() == NUM_RANKS as usize)
    }
}
