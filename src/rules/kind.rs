//! Rule kinds and the value types of the game language.

use serde::{Deserialize, Serialize};

use crate::data::{DataNode, NodeKind};

/// Kind of rule the interpreter can dispatch.
///
/// Handlers are registered per kind. The set is closed: adding a rule means
/// adding a variant here and a matching [`RuleBody`](super::RuleBody) case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleKind {
    // IO rules
    InputChoice,
    InputRange,
    InputText,
    InputVote,
    OutputMessage,
    OutputScore,

    // List operations
    ListContains,
    ListDeal,
    ListDiscard,
    ListElements,
    ListExtend,
    ListReverse,
    ListShuffle,
    ListSize,
    ListSort,

    // Control structures
    LoopFor,
    LoopInParallel,
    LoopParallelFor,
    LoopWhile,
    Match,

    // Misc
    Assignment,
    Timer,
    UpFrom,
}

impl RuleKind {
    /// Every rule kind, in declaration order.
    pub const ALL: [RuleKind; 23] = [
        RuleKind::InputChoice,
        RuleKind::InputRange,
        RuleKind::InputText,
        RuleKind::InputVote,
        RuleKind::OutputMessage,
        RuleKind::OutputScore,
        RuleKind::ListContains,
        RuleKind::ListDeal,
        RuleKind::ListDiscard,
        RuleKind::ListElements,
        RuleKind::ListExtend,
        RuleKind::ListReverse,
        RuleKind::ListShuffle,
        RuleKind::ListSize,
        RuleKind::ListSort,
        RuleKind::LoopFor,
        RuleKind::LoopInParallel,
        RuleKind::LoopParallelFor,
        RuleKind::LoopWhile,
        RuleKind::Match,
        RuleKind::Assignment,
        RuleKind::Timer,
        RuleKind::UpFrom,
    ];

    /// Name as written in game files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RuleKind::InputChoice => "input_choice",
            RuleKind::InputRange => "input_range",
            RuleKind::InputText => "input_text",
            RuleKind::InputVote => "input_vote",
            RuleKind::OutputMessage => "message",
            RuleKind::OutputScore => "scores",
            RuleKind::ListContains => "contains",
            RuleKind::ListDeal => "deal",
            RuleKind::ListDiscard => "discard",
            RuleKind::ListElements => "elements",
            RuleKind::ListExtend => "extend",
            RuleKind::ListReverse => "reverse",
            RuleKind::ListShuffle => "shuffle",
            RuleKind::ListSize => "size",
            RuleKind::ListSort => "sort",
            RuleKind::LoopFor => "for",
            RuleKind::LoopInParallel => "in_parallel",
            RuleKind::LoopParallelFor => "parallel_for",
            RuleKind::LoopWhile => "while",
            RuleKind::Match => "match",
            RuleKind::Assignment => "assignment",
            RuleKind::Timer => "timer",
            RuleKind::UpFrom => "upfrom",
        }
    }

    /// Check if this is an input or output rule.
    #[must_use]
    pub const fn is_io(self) -> bool {
        matches!(
            self,
            RuleKind::InputChoice
                | RuleKind::InputRange
                | RuleKind::InputText
                | RuleKind::InputVote
                | RuleKind::OutputMessage
                | RuleKind::OutputScore
        )
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Declared type of a value in the game language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Boolean,
    /// A name referring to another constant or variable.
    Identifier,
    Number,
    NumberRange,
    String,
}

impl ValueType {
    /// Map a grammar node name to a value type.
    ///
    /// Returns `None` for names the language does not type.
    #[must_use]
    pub fn from_grammar_name(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(ValueType::Boolean),
            "identifier" => Some(ValueType::Identifier),
            "number" => Some(ValueType::Number),
            "number_range" => Some(ValueType::NumberRange),
            "quoted_string" => Some(ValueType::String),
            _ => None,
        }
    }

    /// Node variant a literal of this type is stored as.
    ///
    /// `None` for identifiers, which are resolved rather than stored.
    #[must_use]
    pub const fn node_kind(self) -> Option<NodeKind> {
        match self {
            ValueType::Boolean => Some(NodeKind::Bool),
            ValueType::Number => Some(NodeKind::Int),
            ValueType::NumberRange => Some(NodeKind::Range),
            ValueType::String => Some(NodeKind::Text),
            ValueType::Identifier => None,
        }
    }

    /// Check if a literal node matches this declared type.
    #[must_use]
    pub fn matches(self, value: &DataNode) -> bool {
        self.node_kind() == Some(value.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_kind_names_unique() {
        let mut names: Vec<_> = RuleKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), RuleKind::ALL.len());
    }

    #[test]
    fn test_io_kinds() {
        assert!(RuleKind::InputChoice.is_io());
        assert!(RuleKind::OutputScore.is_io());
        assert!(!RuleKind::Assignment.is_io());
        assert!(!RuleKind::LoopWhile.is_io());
    }

    #[test]
    fn test_value_type_from_grammar_name() {
        assert_eq!(ValueType::from_grammar_name("boolean"), Some(ValueType::Boolean));
        assert_eq!(ValueType::from_grammar_name("quoted_string"), Some(ValueType::String));
        assert_eq!(ValueType::from_grammar_name("number"), Some(ValueType::Number));
        assert_eq!(ValueType::from_grammar_name("list_literal"), None);
    }

    #[test]
    fn test_value_type_matches() {
        assert!(ValueType::Number.matches(&DataNode::int(3)));
        assert!(!ValueType::Number.matches(&DataNode::text("3")));
        assert!(ValueType::NumberRange.matches(&DataNode::range(1, 3)));
        assert!(!ValueType::Identifier.matches(&DataNode::text("x")));
    }
}
