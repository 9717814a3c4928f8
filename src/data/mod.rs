//! Game data: the value model and the schema views built on it.
//!
//! ## Key Components
//!
//! - [`DataNode`]: Recursive tagged value holding all game state
//! - [`DataError`]: Typed failures of value access (wrong type, bounds, key)
//! - [`Configuration`]: Name, player range, and audience flag of a game
//! - [`GameStateObject`]: Keyed store for constants, variables, per-player state
//! - [`Session`]: One running game and its [`GameData`]
//!
//! ## Example Usage
//!
//! ```
//! use social_game_engine::data::{DataNode, DataError, NodeKind};
//!
//! let mut scores = DataNode::unset();
//! scores.set_key("ada", DataNode::int(3)).unwrap();
//! assert!(scores.is_map());
//!
//! let err = scores.as_list().unwrap_err();
//! assert_eq!(err, DataError::WrongType { demanded: NodeKind::List, actual: NodeKind::Map });
//! ```

mod configuration;
mod error;
mod node;
mod session;
mod state_object;

pub use configuration::{Configuration, AUDIENCE_KEY, NAME_KEY, PLAYERS_KEY};
pub use error::{DataError, DataResult};
pub use node::{DataNode, NodeKind, NodeMap, Range};
pub use session::{GameData, Player, Session, SessionId, SharedSession};
pub use state_object::GameStateObject;
