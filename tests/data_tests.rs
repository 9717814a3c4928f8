//! Value model integration tests.
//!
//! Property tests cover predicate/getter agreement, promotion, bounds and
//! key errors, and structural equality. The remaining tests load game data
//! from JSON the way a host would.

use proptest::prelude::*;

use social_game_engine::data::{
    Configuration, DataError, DataNode, GameData, GameStateObject, NodeKind, Range,
};

// =============================================================================
// Strategies
// =============================================================================

fn scalar() -> impl Strategy<Value = DataNode> {
    prop_oneof![
        Just(DataNode::Unset),
        any::<i64>().prop_map(DataNode::Int),
        any::<bool>().prop_map(DataNode::Bool),
        (any::<i64>(), any::<i64>()).prop_map(|(l, h)| DataNode::range(l, h)),
        "[a-z]{0,8}".prop_map(DataNode::Text),
    ]
}

fn node() -> impl Strategy<Value = DataNode> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(DataNode::List),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4).prop_map(DataNode::Map),
        ]
    })
}

/// Error of each typed getter, in `NodeKind` order (excluding `Unset`).
fn getter_errors(node: &DataNode) -> [Option<DataError>; 6] {
    [
        node.as_int().err(),
        node.as_bool().err(),
        node.as_range().err(),
        node.as_text().err(),
        node.as_list().err(),
        node.as_map().err(),
    ]
}

const GETTER_KINDS: [NodeKind; 6] = [
    NodeKind::Int,
    NodeKind::Bool,
    NodeKind::Range,
    NodeKind::Text,
    NodeKind::List,
    NodeKind::Map,
];

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Exactly the matching getter succeeds; every other one names both kinds.
    #[test]
    fn prop_only_matching_getter_succeeds(node in node()) {
        let errors = getter_errors(&node);
        for (error, kind) in errors.iter().zip(GETTER_KINDS) {
            if node.kind() == kind {
                prop_assert_eq!(error, &None);
            } else {
                let expected = DataError::WrongType { demanded: kind, actual: node.kind() };
                prop_assert_eq!(error, &Some(expected));
            }
        }

        let predicates = [
            node.is_int(), node.is_bool(), node.is_range(),
            node.is_text(), node.is_list(), node.is_map(),
        ];
        prop_assert_eq!(predicates, errors.map(|e| e.is_none()));
    }

    /// Pushing into a fresh node promotes it to a list holding the value.
    #[test]
    fn prop_push_promotes_unset(value in node()) {
        let mut target = DataNode::default();
        target.push(value.clone()).unwrap();
        prop_assert_eq!(target, DataNode::List(vec![value]));
    }

    /// Keyed write into a fresh node promotes it to a single-entry map.
    #[test]
    fn prop_set_key_promotes_unset(key in "[a-z]{1,6}", value in node()) {
        let mut target = DataNode::default();
        target.set_key(key.clone(), value.clone()).unwrap();
        prop_assert_eq!(target.len(), Ok(1));
        prop_assert_eq!(target.get_key(&key), Ok(&value));
    }

    /// Any index at or past the end fails, including on an empty list.
    #[test]
    fn prop_index_out_of_bounds(values in prop::collection::vec(scalar(), 0..6), extra in 0usize..4) {
        let len = values.len();
        let mut list = DataNode::List(values);
        let index = len + extra;
        let expected = DataError::IndexOutOfBounds { index, len };
        prop_assert_eq!(list.get_index(index), Err(expected.clone()));
        prop_assert_eq!(list.remove_index(index), Err(expected));
        prop_assert_eq!(list.len(), Ok(len));
    }

    /// Keyed access fails iff the key is absent.
    #[test]
    fn prop_key_not_found_iff_absent(
        entries in prop::collection::btree_map("[a-c]", scalar(), 0..3),
        key in "[a-c]",
    ) {
        let present = entries.contains_key(&key);
        let mut map = DataNode::Map(entries);
        prop_assert_eq!(map.get_key(&key).is_ok(), present);
        let removed = map.remove_key(&key);
        if present {
            prop_assert!(removed.is_ok());
        } else {
            prop_assert_eq!(removed, Err(DataError::KeyNotFound { key }));
        }
    }

    /// Equality is reflexive on clones and sensitive to list order.
    #[test]
    fn prop_structural_equality(a in node(), b in node()) {
        prop_assert_eq!(&a, &a.clone());

        let ab = DataNode::list([a.clone(), b.clone()]);
        let ba = DataNode::list([b.clone(), a.clone()]);
        prop_assert_eq!(ab == ba, a == b);
    }
}

// =============================================================================
// Loading from JSON
// =============================================================================

#[test]
fn test_configuration_from_json() {
    let json = r#"{
        "Map": {
            "name": { "Text": "Rock, Paper, Scissors" },
            "players": { "Range": { "low": 2, "high": 4 } },
            "audience": { "Bool": false }
        }
    }"#;
    let config: Configuration = serde_json::from_str(json).unwrap();
    assert_eq!(config.name(), Ok("Rock, Paper, Scissors"));
    assert_eq!(config.players(), Ok(Range::new(2, 4)));
    assert_eq!(config.audience(), Ok(false));
}

#[test]
fn test_game_data_json_round_trip_preserves_state() {
    let mut constants = GameStateObject::new();
    constants
        .set(
            "weapons",
            DataNode::list([
                DataNode::map([("name", DataNode::text("Rock")), ("beats", DataNode::text("Scissors"))]),
                DataNode::map([("name", DataNode::text("Paper")), ("beats", DataNode::text("Rock"))]),
            ]),
        )
        .unwrap();
    let data = GameData::new(Configuration::with_fields("RPS", Range::new(2, 4), true))
        .with_constants(constants);

    let json = serde_json::to_string(&data).unwrap();
    let loaded: GameData = serde_json::from_str(&json).unwrap();
    assert_eq!(loaded, data);
    assert_eq!(
        loaded.constants.get("weapons").unwrap().get_index(1).unwrap().get_key("beats"),
        Ok(&DataNode::text("Rock"))
    );
}
