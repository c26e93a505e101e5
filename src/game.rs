//! Match controller: turn rotation, move acceptance, and the stored verdict.

use crate::board::{Board, BoardError, Cell};
use crate::player::{Player, PlayerId, Roster};
use crate::rules::{self, Verdict};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Error raised by match operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// A game operation was attempted before both players were created.
    #[display("Players are not defined; create both players first")]
    PlayersUndefined,

    /// Out-of-range coordinates reached the board.
    #[display("{}", _0)]
    Board(BoardError),
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Board(err) => Some(err),
            MatchError::PlayersUndefined => None,
        }
    }
}

impl From<BoardError> for MatchError {
    fn from(err: BoardError) -> Self {
        MatchError::Board(err)
    }
}

/// An explicit, owned match: board, player pair, active turn, verdict.
///
/// A `Match` holds no game until [`Match::start_game`] loads players
/// from a [`Roster`]. Several matches can run side by side; nothing
/// here is process-wide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    board: Board,
    players: Option<[Player; 2]>,
    active: PlayerId,
    verdict: Verdict,
}

impl Match {
    /// Creates a match with an empty board and no players loaded.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            players: None,
            active: PlayerId::new(0),
            verdict: Verdict::Ongoing,
        }
    }

    /// Starts a game: loads the roster's current player pair, resets
    /// the board, clears the verdict, and hands the first turn to
    /// players[0].
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::PlayersUndefined`] when the roster has no
    /// player pair yet.
    #[instrument(skip(self, roster))]
    pub fn start_game(&mut self, roster: &Roster) -> Result<(), MatchError> {
        let players = roster.players().ok_or(MatchError::PlayersUndefined)?;
        info!(player_x = %players[0].name(), player_o = %players[1].name(), "Starting game");
        self.players = Some(players.clone());
        self.board.reset();
        self.verdict = Verdict::Ongoing;
        self.active = players[0].id();
        Ok(())
    }

    /// Restarts the current game with the same players: board and
    /// verdict cleared, first turn back to players[0]. Does not reload
    /// the roster.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::PlayersUndefined`] when no game has been
    /// started yet.
    #[instrument(skip(self))]
    pub fn restart_game(&mut self) -> Result<(), MatchError> {
        let players = self.players.as_ref().ok_or(MatchError::PlayersUndefined)?;
        info!("Restarting game");
        self.active = players[0].id();
        self.board.reset();
        self.verdict = Verdict::Ongoing;
        Ok(())
    }

    /// Plays the active player's mark at 1-based (row, col).
    ///
    /// A move onto an occupied cell is a silent no-op: no error, no
    /// turn advance. Callers need not pre-validate occupancy, but
    /// should consult [`Match::in_progress`] before forwarding further
    /// input once a game finishes.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::PlayersUndefined`] before a game has been
    /// started, and propagates [`BoardError`] for out-of-range
    /// coordinates.
    #[instrument(skip(self))]
    pub fn play_round(&mut self, row: usize, col: usize) -> Result<(), MatchError> {
        if self.players.is_none() {
            return Err(MatchError::PlayersUndefined);
        }

        if self.board.cell(row, col)? != Cell::Empty {
            debug!(row, col, "Cell already occupied, ignoring move");
            return Ok(());
        }

        self.board.set_cell(row, col, self.active)?;
        self.active = self.active.opponent();
        self.verdict = rules::evaluate(&self.board);

        if !self.verdict.is_ongoing() {
            info!(verdict = ?self.verdict, "Game finished");
        }
        Ok(())
    }

    /// Returns true while the game is still ongoing.
    pub fn in_progress(&self) -> bool {
        self.verdict.is_ongoing()
    }

    /// Returns the verdict as of the last accepted move.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Returns the winning player, if a win has been recorded. `None`
    /// covers both the ongoing and drawn cases; use
    /// [`Match::in_progress`] to tell them apart.
    pub fn winner(&self) -> Option<&Player> {
        let id = self.verdict.winner()?;
        self.player(id)
    }

    /// Returns the player whose turn it currently is, once a game has
    /// been started.
    pub fn active_player(&self) -> Option<&Player> {
        self.player(self.active)
    }

    /// Returns the loaded player pair, if a game has been started.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.as_ref()?.get(id.index())
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(first: &str, second: &str) -> Roster {
        let mut roster = Roster::new();
        roster.create_players([first.to_string(), second.to_string()]);
        roster
    }

    #[test]
    fn test_start_without_players_fails() {
        let mut game = Match::new();
        assert_eq!(
            game.start_game(&Roster::new()),
            Err(MatchError::PlayersUndefined)
        );
        assert_eq!(game.restart_game(), Err(MatchError::PlayersUndefined));
        assert_eq!(game.play_round(1, 1), Err(MatchError::PlayersUndefined));
    }

    #[test]
    fn test_start_seeds_first_player() {
        let mut game = Match::new();
        game.start_game(&roster("Alice", "Bob")).unwrap();
        assert_eq!(game.active_player().unwrap().name(), "Alice");
        assert!(game.in_progress());
        assert!(game.winner().is_none());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Match::new();
        game.start_game(&roster("Alice", "Bob")).unwrap();

        game.play_round(1, 1).unwrap();
        assert_eq!(game.active_player().unwrap().name(), "Bob");
        game.play_round(2, 1).unwrap();
        assert_eq!(game.active_player().unwrap().name(), "Alice");
        game.play_round(1, 2).unwrap();
        assert_eq!(game.active_player().unwrap().name(), "Bob");
    }

    #[test]
    fn test_occupied_cell_is_silent_noop() {
        let mut game = Match::new();
        game.start_game(&roster("Alice", "Bob")).unwrap();

        game.play_round(2, 2).unwrap();
        let board_before = game.board().clone();

        // Bob tries Alice's cell; nothing changes, still Bob's turn.
        game.play_round(2, 2).unwrap();
        assert_eq!(game.board(), &board_before);
        assert_eq!(game.active_player().unwrap().name(), "Bob");
    }

    #[test]
    fn test_out_of_range_propagates() {
        let mut game = Match::new();
        game.start_game(&roster("Alice", "Bob")).unwrap();
        assert_eq!(
            game.play_round(0, 1),
            Err(MatchError::Board(BoardError::RowOutOfRange(0)))
        );
        assert_eq!(
            game.play_round(1, 4),
            Err(MatchError::Board(BoardError::ColOutOfRange(4)))
        );
    }

    #[test]
    fn test_restart_keeps_players() {
        let mut game = Match::new();
        game.start_game(&roster("Alice", "Bob")).unwrap();
        game.play_round(1, 1).unwrap();
        game.play_round(2, 2).unwrap();

        game.restart_game().unwrap();
        assert_eq!(game.board(), &Board::new());
        assert!(game.in_progress());
        assert!(game.winner().is_none());
        assert_eq!(game.active_player().unwrap().name(), "Alice");
    }

    #[test]
    fn test_start_reloads_roster() {
        let mut game = Match::new();
        game.start_game(&roster("Alice", "Bob")).unwrap();
        game.start_game(&roster("Carol", "Dave")).unwrap();
        assert_eq!(game.active_player().unwrap().name(), "Carol");
        assert_eq!(game.players().unwrap()[1].name(), "Dave");
    }
}
