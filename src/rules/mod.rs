//! Game rules: pure evaluation of a board position.
//!
//! Rules are separated from board storage so evaluation stays a pure
//! function: the match controller stores the verdict, the rules never
//! mutate anything.

pub mod draw;
pub mod win;

pub use draw::{empty_cells, is_full};
pub use win::{find_winner, WINNING_TRIPLES};

use crate::board::Board;
use crate::player::PlayerId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of evaluating a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Game is still ongoing.
    Ongoing,
    /// The player with this id has three in a row.
    Won(PlayerId),
    /// Board is full with no winner.
    Drawn,
}

impl Verdict {
    /// Returns the winning id, if any.
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            Verdict::Won(id) => Some(id),
            _ => None,
        }
    }

    /// Returns true while the game is still ongoing.
    pub fn is_ongoing(self) -> bool {
        matches!(self, Verdict::Ongoing)
    }

    /// Returns true for a drawn game.
    pub fn is_draw(self) -> bool {
        matches!(self, Verdict::Drawn)
    }
}

/// Evaluates a board position.
///
/// Checks the winning triples first (in fixed table order, first match
/// wins), then declares a draw when no empty cell remains, otherwise
/// the game is ongoing.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some(id) = win::find_winner(board) {
        return Verdict::Won(id);
    }
    if draw::is_full(board) {
        return Verdict::Drawn;
    }
    Verdict::Ongoing
}
