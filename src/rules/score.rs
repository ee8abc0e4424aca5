//! Final-score computation.

use im::Vector;

use crate::board::CellState;
use crate::core::{PlayerId, PlayerMap};
use crate::moves::HistoryEntry;

/// Starting credit minus the area of each player's surviving pieces.
///
/// The opening piece counts for nobody.
#[must_use]
pub fn calc_scores(history: &Vector<HistoryEntry>, starting_credit: i32) -> PlayerMap<i32> {
    let mut scores = PlayerMap::with_value(starting_credit);

    for entry in history.iter().filter(|entry| !entry.removed) {
        let owner = PlayerId::all().find(|&player| CellState::piece_color(player) == entry.color());
        if let Some(player) = owner {
            scores[player] -= entry.mv.form.len() as i32;
        }
    }

    scores
}
