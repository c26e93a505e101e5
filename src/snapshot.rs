//! Serializable presentation view of a match.
//!
//! Presentation adapters render from this snapshot instead of poking at
//! the controller: one read per event, then draw.

use crate::board::{Cell, SIZE};
use crate::game::Match;
use crate::rules::Verdict;
use serde::{Deserialize, Serialize};

/// Point-in-time view of a match for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Grid of cells, rows in order.
    pub grid: [[Cell; SIZE]; SIZE],
    /// Name of the player to move, once a game has started.
    pub active_player: Option<String>,
    /// Name of the winner, if the game has been won.
    pub winner: Option<String>,
    /// Verdict as of the last accepted move.
    pub verdict: Verdict,
}

impl MatchSnapshot {
    /// Captures a snapshot of the given match.
    pub fn capture(game: &Match) -> Self {
        Self {
            grid: game.board().state(),
            active_player: game.active_player().map(|p| p.name().to_string()),
            winner: game.winner().map(|p| p.name().to_string()),
            verdict: game.verdict(),
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        !self.verdict.is_ongoing()
    }

    /// Renders the grid as text, markers per cell (`X`, `O`, blank).
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.grid.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|cell| cell.marker().to_string()).collect();
            out.push_str(&format!(" {} \n", line.join(" | ")));
            if i < SIZE - 1 {
                out.push_str("---+---+---\n");
            }
        }
        out
    }

    /// One-line status for display above the board.
    pub fn status_line(&self) -> String {
        match (&self.verdict, &self.active_player, &self.winner) {
            (Verdict::Won(_), _, Some(name)) => format!("{} won the game!", name),
            (Verdict::Drawn, _, _) => "It's a draw!".to_string(),
            (_, Some(name), _) => format!("{}'s turn", name),
            _ => "Waiting for players".to_string(),
        }
    }
}
