//! Noughts - a tic-tac-toe match engine.
//!
//! The core of a two-player tic-tac-toe game: board state, turn
//! rotation, and win/draw detection. Presentation is left to adapters
//! (a terminal one ships as the `console` binary); the engine exposes
//! snapshots to render from and accepts (row, col) moves in 1-based
//! matrix notation.
//!
//! # Architecture
//!
//! - **Coords**: 1-based (row, col) to 0-based flat-index mapping
//! - **Board**: 3x3 grid of tagged cells with validated access
//! - **Roster**: the immutable two-player registry
//! - **Rules**: pure evaluation of a position (ongoing, won, drawn)
//! - **Match**: the controller owning board, players, turn, and verdict
//! - **Snapshot**: serializable view for presentation adapters
//!
//! # Example
//!
//! ```
//! use noughts::{Match, Roster};
//!
//! let mut roster = Roster::new();
//! roster.create_players(["Alice".to_string(), "Bob".to_string()]);
//!
//! let mut game = Match::new();
//! game.start_game(&roster)?;
//! game.play_round(2, 2)?;
//! assert_eq!(game.active_player().unwrap().name(), "Bob");
//! # Ok::<(), noughts::MatchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod coords;
mod game;
mod player;
mod rules;
mod snapshot;

// Crate-level exports - coordinate helper
pub use coords::{flat_to_matrix, matrix_to_flat};

// Crate-level exports - board
pub use board::{Board, BoardError, Cell, CELLS, SIZE};

// Crate-level exports - players
pub use player::{Player, PlayerId, Roster};

// Crate-level exports - rules
pub use rules::{empty_cells, evaluate, find_winner, is_full, Verdict, WINNING_TRIPLES};

// Crate-level exports - match controller
pub use game::{Match, MatchError};

// Crate-level exports - presentation view
pub use snapshot::MatchSnapshot;
