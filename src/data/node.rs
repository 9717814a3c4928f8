//! Recursive value node holding all game and session data.
//!
//! ## Variants
//!
//! - `Unset`: Freshly constructed, no value yet
//! - `Int`: Numbers (scores, counters)
//! - `Bool`: Flags (audience enabled, round over)
//! - `Range`: Closed numeric range (player counts)
//! - `Text`: Strings (names, messages)
//! - `List`: Ordered sequence of nodes
//! - `Map`: Key-unique map from text to node
//!
//! The active variant is the only source of truth. Typed accessors fail with
//! [`DataError::WrongType`] instead of coercing. The one exception is
//! promotion: an `Unset` node becomes a `List` on its first [`DataNode::push`]
//! and a `Map` on its first [`DataNode::set_key`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::{DataError, DataResult};

/// Closed numeric range `[low, high]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Lower bound (inclusive).
    pub low: i64,
    /// Upper bound (inclusive).
    pub high: i64,
}

impl Range {
    /// Create a new range.
    #[must_use]
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Check if a value lies within the range.
    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }
}

impl From<(i64, i64)> for Range {
    fn from((low, high): (i64, i64)) -> Self {
        Self::new(low, high)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Discriminant of a [`DataNode`], used in error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Unset,
    Int,
    Bool,
    Range,
    Text,
    List,
    Map,
}

impl NodeKind {
    /// Human-readable name of the variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::Unset => "unset",
            NodeKind::Int => "integer",
            NodeKind::Bool => "boolean",
            NodeKind::Range => "range",
            NodeKind::Text => "string",
            NodeKind::List => "list",
            NodeKind::Map => "map",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map payload of a [`DataNode`].
pub type NodeMap = BTreeMap<String, DataNode>;

/// A recursive tagged value.
///
/// Equality is structural: same variant, and for composites the elements
/// compare equal in order (lists) or per key (maps).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataNode {
    /// No value yet. Promotes to `List` or `Map` on first write.
    #[default]
    Unset,
    /// Integer value.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Closed numeric range.
    Range(Range),
    /// Text value.
    Text(String),
    /// Ordered sequence.
    List(Vec<DataNode>),
    /// Key-unique map.
    Map(NodeMap),
}

impl DataNode {
    // === Factories ===

    /// Create an unset node.
    #[must_use]
    pub const fn unset() -> Self {
        DataNode::Unset
    }

    /// Create an integer node.
    #[must_use]
    pub const fn int(value: i64) -> Self {
        DataNode::Int(value)
    }

    /// Create a boolean node.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        DataNode::Bool(value)
    }

    /// Create a range node.
    #[must_use]
    pub const fn range(low: i64, high: i64) -> Self {
        DataNode::Range(Range::new(low, high))
    }

    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        DataNode::Text(value.into())
    }

    /// Create a list node from existing values.
    pub fn list(values: impl IntoIterator<Item = DataNode>) -> Self {
        DataNode::List(values.into_iter().collect())
    }

    /// Create a map node from `(key, value)` pairs. Later duplicates win.
    pub fn map<K: Into<String>>(entries: impl IntoIterator<Item = (K, DataNode)>) -> Self {
        DataNode::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Create an empty list node.
    #[must_use]
    pub const fn empty_list() -> Self {
        DataNode::List(Vec::new())
    }

    /// Create an empty map node.
    #[must_use]
    pub const fn empty_map() -> Self {
        DataNode::Map(BTreeMap::new())
    }

    // === Predicates ===

    /// The active variant.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            DataNode::Unset => NodeKind::Unset,
            DataNode::Int(_) => NodeKind::Int,
            DataNode::Bool(_) => NodeKind::Bool,
            DataNode::Range(_) => NodeKind::Range,
            DataNode::Text(_) => NodeKind::Text,
            DataNode::List(_) => NodeKind::List,
            DataNode::Map(_) => NodeKind::Map,
        }
    }

    /// Check if the node has no value yet.
    #[must_use]
    pub const fn is_unset(&self) -> bool {
        matches!(self, DataNode::Unset)
    }

    /// Check if this is an integer.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, DataNode::Int(_))
    }

    /// Check if this is a boolean.
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, DataNode::Bool(_))
    }

    /// Check if this is a range.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self, DataNode::Range(_))
    }

    /// Check if this is text.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, DataNode::Text(_))
    }

    /// Check if this is a list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, DataNode::List(_))
    }

    /// Check if this is a map.
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, DataNode::Map(_))
    }

    /// Check if a list node has no elements. Fails on any other variant.
    pub fn is_empty_list(&self) -> DataResult<bool> {
        self.as_list().map(|v| v.is_empty())
    }

    /// Check if a map node has no entries. Fails on any other variant.
    pub fn is_empty_map(&self) -> DataResult<bool> {
        self.as_map().map(|m| m.is_empty())
    }

    /// Number of elements in a list or map node.
    pub fn len(&self) -> DataResult<usize> {
        match self {
            DataNode::List(v) => Ok(v.len()),
            DataNode::Map(m) => Ok(m.len()),
            other => Err(DataError::wrong_type(NodeKind::List, other.kind())),
        }
    }

    // === Getters ===

    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> DataResult<i64> {
        match self {
            DataNode::Int(v) => Ok(*v),
            other => Err(DataError::wrong_type(NodeKind::Int, other.kind())),
        }
    }

    /// Get as boolean if this is a Bool value.
    pub fn as_bool(&self) -> DataResult<bool> {
        match self {
            DataNode::Bool(v) => Ok(*v),
            other => Err(DataError::wrong_type(NodeKind::Bool, other.kind())),
        }
    }

    /// Get as range if this is a Range value.
    pub fn as_range(&self) -> DataResult<Range> {
        match self {
            DataNode::Range(r) => Ok(*r),
            other => Err(DataError::wrong_type(NodeKind::Range, other.kind())),
        }
    }

    /// Get as string slice if this is a Text value.
    pub fn as_text(&self) -> DataResult<&str> {
        match self {
            DataNode::Text(s) => Ok(s),
            other => Err(DataError::wrong_type(NodeKind::Text, other.kind())),
        }
    }

    /// Get as slice if this is a List value.
    pub fn as_list(&self) -> DataResult<&[DataNode]> {
        match self {
            DataNode::List(v) => Ok(v),
            other => Err(DataError::wrong_type(NodeKind::List, other.kind())),
        }
    }

    /// Get the list for in-place mutation.
    pub fn as_list_mut(&mut self) -> DataResult<&mut Vec<DataNode>> {
        match self {
            DataNode::List(v) => Ok(v),
            other => Err(DataError::wrong_type(NodeKind::List, other.kind())),
        }
    }

    /// Get as map if this is a Map value.
    pub fn as_map(&self) -> DataResult<&NodeMap> {
        match self {
            DataNode::Map(m) => Ok(m),
            other => Err(DataError::wrong_type(NodeKind::Map, other.kind())),
        }
    }

    /// Get the map for in-place mutation.
    pub fn as_map_mut(&mut self) -> DataResult<&mut NodeMap> {
        match self {
            DataNode::Map(m) => Ok(m),
            other => Err(DataError::wrong_type(NodeKind::Map, other.kind())),
        }
    }

    /// Element of a list node.
    pub fn get_index(&self, index: usize) -> DataResult<&DataNode> {
        let list = self.as_list()?;
        let len = list.len();
        list.get(index)
            .ok_or(DataError::IndexOutOfBounds { index, len })
    }

    /// Mutable element of a list node.
    pub fn get_index_mut(&mut self, index: usize) -> DataResult<&mut DataNode> {
        let list = self.as_list_mut()?;
        let len = list.len();
        list.get_mut(index)
            .ok_or(DataError::IndexOutOfBounds { index, len })
    }

    /// Value stored under `key` in a map node.
    pub fn get_key(&self, key: &str) -> DataResult<&DataNode> {
        self.as_map()?
            .get(key)
            .ok_or_else(|| DataError::key_not_found(key))
    }

    /// Mutable value stored under `key` in a map node.
    pub fn get_key_mut(&mut self, key: &str) -> DataResult<&mut DataNode> {
        self.as_map_mut()?
            .get_mut(key)
            .ok_or_else(|| DataError::key_not_found(key))
    }

    /// Check if a map node contains `key`. Fails on any other variant.
    pub fn contains_key(&self, key: &str) -> DataResult<bool> {
        self.as_map().map(|m| m.contains_key(key))
    }

    // === Setters (overwrite the active variant) ===

    pub fn set_unset(&mut self) {
        *self = DataNode::Unset;
    }

    pub fn set_int(&mut self, value: i64) {
        *self = DataNode::Int(value);
    }

    pub fn set_bool(&mut self, value: bool) {
        *self = DataNode::Bool(value);
    }

    pub fn set_range(&mut self, value: Range) {
        *self = DataNode::Range(value);
    }

    pub fn set_text(&mut self, value: impl Into<String>) {
        *self = DataNode::Text(value.into());
    }

    pub fn set_list(&mut self, value: Vec<DataNode>) {
        *self = DataNode::List(value);
    }

    pub fn set_map(&mut self, value: NodeMap) {
        *self = DataNode::Map(value);
    }

    // === Composite mutation ===

    /// Append to a list node, promoting an unset node to an empty list first.
    pub fn push(&mut self, value: DataNode) -> DataResult<()> {
        if self.is_unset() {
            *self = DataNode::empty_list();
        }
        self.as_list_mut()?.push(value);
        Ok(())
    }

    /// Overwrite the element at `index` of a list node.
    pub fn set_index(&mut self, index: usize, value: DataNode) -> DataResult<()> {
        *self.get_index_mut(index)? = value;
        Ok(())
    }

    /// Insert or overwrite `key` in a map node, promoting an unset node to an
    /// empty map first.
    pub fn set_key(&mut self, key: impl Into<String>, value: DataNode) -> DataResult<()> {
        if self.is_unset() {
            *self = DataNode::empty_map();
        }
        self.as_map_mut()?.insert(key.into(), value);
        Ok(())
    }

    /// Remove and return the element at `index` of a list node.
    pub fn remove_index(&mut self, index: usize) -> DataResult<DataNode> {
        let list = self.as_list_mut()?;
        if index >= list.len() {
            return Err(DataError::IndexOutOfBounds {
                index,
                len: list.len(),
            });
        }
        Ok(list.remove(index))
    }

    /// Remove and return the value under `key` of a map node.
    pub fn remove_key(&mut self, key: &str) -> DataResult<DataNode> {
        self.as_map_mut()?
            .remove(key)
            .ok_or_else(|| DataError::key_not_found(key))
    }
}

impl From<i64> for DataNode {
    fn from(v: i64) -> Self {
        DataNode::Int(v)
    }
}

impl From<i32> for DataNode {
    fn from(v: i32) -> Self {
        DataNode::Int(i64::from(v))
    }
}

impl From<bool> for DataNode {
    fn from(v: bool) -> Self {
        DataNode::Bool(v)
    }
}

impl From<Range> for DataNode {
    fn from(v: Range) -> Self {
        DataNode::Range(v)
    }
}

impl From<String> for DataNode {
    fn from(v: String) -> Self {
        DataNode::Text(v)
    }
}

impl From<&str> for DataNode {
    fn from(v: &str) -> Self {
        DataNode::Text(v.to_string())
    }
}

impl From<Vec<DataNode>> for DataNode {
    fn from(v: Vec<DataNode>) -> Self {
        DataNode::List(v)
    }
}

impl From<NodeMap> for DataNode {
    fn from(v: NodeMap) -> Self {
        DataNode::Map(v)
    }
}
