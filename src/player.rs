//! Player identity and the two-player registry.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Numeric player identifier. Ids are 0 and 1 in a two-player match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Creates a new player id.
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Returns the raw 0-based index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the other player's id: `(id + 1) % 2`.
    pub const fn opponent(self) -> Self {
        Self((self.0 + 1) % 2)
    }

    /// Returns the board marker for this id: `X` for 0, `O` for 1.
    pub const fn marker(self) -> char {
        if self.0 == 0 {
            'X'
        } else {
            'O'
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player: an immutable (display name, id) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    id: PlayerId,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, id: PlayerId) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the player's id.
    pub fn id(&self) -> PlayerId {
        self.id
    }
}

/// Registry holding the current pair of players.
///
/// Empty until [`Roster::create_players`] is called; creating again
/// replaces the previous pair wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Option<[Player; 2]>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the player pair from two names, ids 0 and 1 in array order.
    /// Replaces any previously held players.
    #[instrument(skip(self))]
    pub fn create_players(&mut self, names: [String; 2]) {
        let [first, second] = names;
        info!(player_x = %first, player_o = %second, "Registering players");
        self.players = Some([
            Player::new(first, PlayerId::new(0)),
            Player::new(second, PlayerId::new(1)),
        ]);
    }

    /// Returns the player pair, if defined.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Returns true once both players have been created.
    pub fn is_defined(&self) -> bool {
        self.players.is_some()
    }
}
