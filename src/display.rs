//! Human-readable rendering of a game layout.
//!
//! Renders a `Game` as multi-line text using the compact `Card`
//! representation. Face-down cards are shown as "XX" and face-up cards
//! with their `short_str()` rank/suit code. This is a debugging and
//! demo-binary surface; interactive presentation is a host concern.

use crate::card::Card;
use crate::game::Game;
use crate::pile::NUM_TABLEAU;

/// Format a single card for display, honoring its face-up flag.
///
/// - Face-down cards render as `"XX"`.
/// - Face-up cards use `Card::short_str()` such as `"AH"`, `"7C"`, `"TD"`.
pub fn format_card_visible(card: Card) -> String {
    if card.face_up {
        card.short_str()
    } else {
        "XX".to_string()
    }
}

/// Render only the foundation row, showing each pile's top card.
///
///   - Empty foundation: `[  ]`
///   - Non-empty: e.g. `[AH]`, `[7C]`, `[KD]`
pub fn render_foundations(game: &Game) -> String {
    let mut s = String::new();
    s.push_str("Foundations: ");
    for i in 0.. {
        let Some(pile) = game.foundation(i) else {
            break;
        };
        match pile.last() {
            None => s.push_str("[  ] "),
            Some(top) => {
                s.push('[');
                s.push_str(&top.short_str());
                s.push_str("] ");
            }
        }
    }
    s.trim_end().to_string()
}

/// Render the stock (face-down) and waste (face-up) piles on one line.
///
/// Stock is shown as a count of remaining face-down cards; waste shows
/// its top card if present plus its size.
pub fn render_stock_and_waste(game: &Game) -> String {
    let mut s = String::new();

    // Stock: internal order is not revealed, only the count.
    let stock_len = game.stock().len();
    if stock_len == 0 {
        s.push_str("Stock: [empty]");
    } else {
        s.push_str(&format!("Stock: [{stock_len} cards]"));
    }

    s.push_str("    "); // spacing

    match game.waste().last() {
        None => s.push_str("Waste: [empty]"),
        Some(top) => {
            s.push_str(&format!(
                "Waste: [{}] ({} cards)",
                top.short_str(),
                game.waste().len()
            ));
        }
    }

    s
}

/// Render all tableau piles as a multi-line string.
///
/// Piles are arranged as 7 vertical stacks, each cell three characters
/// wide. The piles are top-justified: the bottom-most cards share the
/// first row, and the lowest non-empty row of each pile is the playable
/// edge.
pub fn render_tableau(game: &Game) -> String {
    let mut s = String::new();

    s.push_str("Tableau:\n");
    s.push_str("      ");
    for t in 0..NUM_TABLEAU {
        s.push_str(&format!(" T{} ", t + 1));
    }
    s.push('\n');

    let max_height = (0..NUM_TABLEAU)
        .filter_map(|t| game.tableau(t))
        .map(<[Card]>::len)
        .max()
        .unwrap_or(0);

    for row in 0..max_height {
        s.push_str(&format!("  {:3} ", row + 1));
        for t in 0..NUM_TABLEAU {
            let pile = game.tableau(t).unwrap_or(&[]);
            match pile.get(row) {
                Some(&card) => s.push_str(&format!(" {} ", format_card_visible(card))),
                None => s.push_str("    "),
            }
        }
        s.push('\n');
    }

    s
}

/// Render the full layout plus the move and time counters.
pub fn render_game(game: &Game) -> String {
    format!(
        "{}\n{}\n{}Moves: {}   Time: {}s\n",
        render_foundations(game),
        render_stock_and_waste(game),
        render_tableau(game),
        game.move_count(),
        game.elapsed_secs()
    )
}
