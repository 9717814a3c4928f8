//! Game configuration: a schema view over a map-valued node.
//!
//! The configuration block of a game file declares the game name, the
//! allowed player count, and whether an audience may join. Reads assert the
//! stored variant and propagate [`DataError`](super::DataError) unchanged.

use serde::{Deserialize, Serialize};

use super::error::DataResult;
use super::node::{DataNode, Range};

/// Key holding the game name.
pub const NAME_KEY: &str = "name";
/// Key holding the allowed player range.
pub const PLAYERS_KEY: &str = "players";
/// Key holding the audience flag.
pub const AUDIENCE_KEY: &str = "audience";

/// Read view over a game's configuration block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    root: DataNode,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            root: DataNode::empty_map(),
        }
    }
}

impl Configuration {
    /// Wrap an existing node. The node should be a map; reads fail otherwise.
    #[must_use]
    pub fn new(root: DataNode) -> Self {
        Self { root }
    }

    /// Build a configuration from its three fields.
    pub fn with_fields(name: impl Into<String>, players: Range, audience: bool) -> Self {
        Self::new(DataNode::map([
            (NAME_KEY, DataNode::text(name)),
            (PLAYERS_KEY, DataNode::Range(players)),
            (AUDIENCE_KEY, DataNode::boolean(audience)),
        ]))
    }

    /// The underlying node.
    #[must_use]
    pub fn node(&self) -> &DataNode {
        &self.root
    }

    /// Game name.
    pub fn name(&self) -> DataResult<&str> {
        self.root.get_key(NAME_KEY)?.as_text()
    }

    /// Allowed number of players.
    pub fn players(&self) -> DataResult<Range> {
        self.root.get_key(PLAYERS_KEY)?.as_range()
    }

    /// Whether an audience may join.
    pub fn audience(&self) -> DataResult<bool> {
        self.root.get_key(AUDIENCE_KEY)?.as_bool()
    }
}
