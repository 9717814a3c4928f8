//! Named-object store backing constants, variables, and per-player state.

use serde::{Deserialize, Serialize};

use super::error::DataResult;
use super::node::DataNode;

/// Generic keyed view over a map-valued root node.
///
/// Used for a game's constants, variables, per-player and per-audience
/// state. All operations forward to the root map and propagate its errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameStateObject {
    root: DataNode,
}

impl Default for GameStateObject {
    fn default() -> Self {
        Self {
            root: DataNode::empty_map(),
        }
    }
}

impl GameStateObject {
    /// Create an empty object store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing node.
    #[must_use]
    pub fn from_node(root: DataNode) -> Self {
        Self { root }
    }

    /// The underlying node.
    #[must_use]
    pub fn node(&self) -> &DataNode {
        &self.root
    }

    /// Get an object by name.
    pub fn get(&self, key: &str) -> DataResult<&DataNode> {
        self.root.get_key(key)
    }

    /// Get a mutable object by name.
    pub fn get_mut(&mut self, key: &str) -> DataResult<&mut DataNode> {
        self.root.get_key_mut(key)
    }

    /// Check if an object exists.
    pub fn contains(&self, key: &str) -> DataResult<bool> {
        self.root.contains_key(key)
    }

    /// Set or overwrite an object.
    pub fn set(&mut self, key: impl Into<String>, value: DataNode) -> DataResult<()> {
        self.root.set_key(key, value)
    }

    /// Remove an object, returning it.
    pub fn remove(&mut self, key: &str) -> DataResult<DataNode> {
        self.root.remove_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;

    #[test]
    fn test_set_get_remove() {
        let mut vars = GameStateObject::new();
        vars.set("round", DataNode::int(1)).unwrap();
        assert_eq!(vars.get("round"), Ok(&DataNode::int(1)));
        assert_eq!(vars.contains("round"), Ok(true));

        vars.get_mut("round").unwrap().set_int(2);
        assert_eq!(vars.get("round"), Ok(&DataNode::int(2)));

        assert_eq!(vars.remove("round"), Ok(DataNode::int(2)));
        assert_eq!(vars.contains("round"), Ok(false));
    }

    #[test]
    fn test_missing_object() {
        let mut vars = GameStateObject::new();
        assert_eq!(
            vars.get("winners"),
            Err(DataError::KeyNotFound { key: "winners".into() })
        );
        assert!(vars.remove("winners").is_err());
    }

    #[test]
    fn test_unset_root_promotes_on_set() {
        let mut vars = GameStateObject::from_node(DataNode::unset());
        vars.set("weapons", DataNode::empty_list()).unwrap();
        assert!(vars.node().is_map());
    }
}
