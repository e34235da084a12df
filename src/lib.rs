//! Rules engine and state machine for single-player Klondike solitaire.
//!
//! The crate owns the pile model, move validation and application, the
//! draw/recycle cycle, win detection, and step-wise auto-completion. It
//! produces no output of its own; a presentation layer calls in, then
//! reads the resulting state back through the accessors on [`Game`].

pub mod autoplay;
pub mod card;
pub mod deck;
pub mod display;
pub mod game;
pub mod moves;
pub mod pile;

pub use autoplay::{AutoComplete, AutoStep};
pub use card::{Card, Color, Rank, Suit};
pub use game::Game;
pub use moves::MoveSource;
pub use pile::PileId;

use std::env;

use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

/// Entry point for the `patience-engine` demo binary.
///
/// Parses a very small command-line surface:
///   * `--seed=<u64>`   → deal a specific pseudo-random game
///   * `--draws=<n>`    → number of stock draws to perform (default 3)
///
/// Deals a game, prints the layout, performs the requested draws, plays
/// any available auto-complete steps, and prints the final layout. This
/// is a smoke-test surface, not a playable interface.
///
/// Logging is wired to the environment: set `RUST_LOG=debug` (or
/// `trace`) to see the engine's deal and auto-complete output.
///
/// Example:
///   cargo run -- --seed=12345 --draws=5
pub fn run() {
    env_logger::init();

    let mut seed: Option<u64> = None;
    let mut draws: u32 = 3;

    // Very small hand-rolled argument parser.
    for arg in env::args().skip(1) {
        if let Some(rest) = arg.strip_prefix("--seed=") {
            match rest.parse::<u64>() {
                Ok(v) => seed = Some(v),
                Err(_) => eprintln!("Warning: could not parse seed from '{rest}'"),
            }
        } else if let Some(rest) = arg.strip_prefix("--draws=") {
            match rest.parse::<u32>() {
                Ok(v) => draws = v,
                Err(_) => eprintln!("Warning: could not parse draw count from '{rest}'"),
            }
        } else {
            eprintln!(
                "Warning: unrecognized argument '{arg}'; supported: --seed=<u64>, --draws=<n>"
            );
        }
    }

    let mut game = match seed {
        Some(seed) => {
            println!("Dealing seeded game (seed = {seed})");
            Game::new(&mut StdRng::seed_from_u64(seed))
        }
        None => {
            println!("Dealing random game");
            Game::new(&mut thread_rng())
        }
    };

    println!();
    println!("{}", display::render_game(&game));

    for _ in 0..draws {
        game.draw_from_stock();
    }
    println!("After {draws} draw(s):");
    println!("{}", display::render_game(&game));

    if game.can_auto_complete() {
        let steps: Vec<AutoStep> = game.auto_complete().collect();
        println!("Auto-complete played {} move(s)", steps.len());
    }

    println!(
        "Moves: {}   Won: {}",
        game.move_count(),
        game.check_win()
    );
}
