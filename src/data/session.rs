//! Game sessions and the data their rules mutate.
//!
//! A [`Session`] is owned by the host (wrapped in [`SharedSession`]) and
//! outlives the process driving its rules. Processes only keep a `Weak`
//! back-reference, so dropping a session never leaves a dangling pointer:
//! the process simply observes that its session is gone.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::configuration::Configuration;
use super::state_object::GameStateObject;

/// Unique identifier for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl SessionId {
    /// Create a new session ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// A player seated in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Connection-derived identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
}

impl Player {
    /// Create a new player.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Everything a game's rules can read or write.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    pub configuration: Configuration,
    pub constants: GameStateObject,
    pub variables: GameStateObject,
    pub per_player: GameStateObject,
    pub per_audience: GameStateObject,
}

impl GameData {
    /// Create game data from a configuration, with empty state objects.
    #[must_use]
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            ..Self::default()
        }
    }

    /// Set the constants (builder pattern).
    #[must_use]
    pub fn with_constants(mut self, constants: GameStateObject) -> Self {
        self.constants = constants;
        self
    }

    /// Set the initial variables (builder pattern).
    #[must_use]
    pub fn with_variables(mut self, variables: GameStateObject) -> Self {
        self.variables = variables;
        self
    }
}

/// One running game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    join_code: String,
    game_data: GameData,
    players: Vec<Player>,
}

/// Host-owned session handle. Processes hold a `Weak` of this.
pub type SharedSession = Rc<RefCell<Session>>;

impl Session {
    /// Create a new session with no players.
    pub fn new(id: SessionId, game_data: GameData, join_code: impl Into<String>) -> Self {
        Self {
            id,
            join_code: join_code.into(),
            game_data,
            players: Vec::new(),
        }
    }

    /// Wrap into a shared handle for the host to own.
    #[must_use]
    pub fn into_shared(self) -> SharedSession {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn join_code(&self) -> &str {
        &self.join_code
    }

    #[must_use]
    pub fn game_data(&self) -> &GameData {
        &self.game_data
    }

    pub fn game_data_mut(&mut self) -> &mut GameData {
        &mut self.game_data
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Seat a player. Returns `false` if a player with the same id is already seated.
    pub fn add_player(&mut self, player: Player) -> bool {
        if self.has_player(player.id) {
            return false;
        }
        self.players.push(player);
        true
    }

    /// Check if a player is seated.
    #[must_use]
    pub fn has_player(&self, player_id: u64) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataNode, Range};

    fn test_session() -> Session {
        let config = Configuration::with_fields("Trivia", Range::new(1, 8), true);
        Session::new(SessionId::new(3), GameData::new(config), "ABC123")
    }

    #[test]
    fn test_session_id() {
        let id = SessionId::new(9);
        assert_eq!(id.raw(), 9);
        assert_eq!(format!("{}", id), "Session(9)");
    }

    #[test]
    fn test_session_accessors() {
        let session = test_session();
        assert_eq!(session.id(), SessionId::new(3));
        assert_eq!(session.join_code(), "ABC123");
        assert_eq!(session.game_data().configuration.name(), Ok("Trivia"));
        assert!(session.players().is_empty());
    }

    #[test]
    fn test_add_player_rejects_duplicates() {
        let mut session = test_session();
        assert!(session.add_player(Player::new(1, "ada")));
        assert!(session.add_player(Player::new(2, "bob")));
        assert!(!session.add_player(Player::new(1, "ada again")));
        assert_eq!(session.players().len(), 2);
        assert!(session.has_player(2));
    }

    #[test]
    fn test_game_data_mutation() {
        let mut session = test_session();
        session
            .game_data_mut()
            .variables
            .set("round", DataNode::int(1))
            .unwrap();
        assert_eq!(
            session.game_data().variables.get("round"),
            Ok(&DataNode::int(1))
        );
    }
}
