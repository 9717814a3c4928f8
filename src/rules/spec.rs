//! Rule specifications and the LIFO stack they wait on.
//!
//! A parser turns game source into a [`RuleSpecStack`]; the interpreter pops
//! one [`RuleSpec`] at a time and hands it to the handler registered for its
//! [`RuleKind`].

use serde::{Deserialize, Serialize};

use crate::data::DataNode;

use super::kind::{RuleKind, ValueType};

/// Payload of an assignment rule: `target <- value`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSpec {
    /// Name of the variable being written.
    pub target: String,
    /// Declared type of `value`.
    pub value_type: ValueType,
    /// Literal value, or a text node naming the source when `value_type` is
    /// [`ValueType::Identifier`].
    pub value: DataNode,
}

impl AssignmentSpec {
    /// Create a new assignment payload.
    pub fn new(target: impl Into<String>, value_type: ValueType, value: DataNode) -> Self {
        Self {
            target: target.into(),
            value_type,
            value,
        }
    }
}

/// What to run, one case per rule kind.
///
/// Only assignment carries a payload; the remaining kinds are placeholders
/// until their handlers exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleBody {
    InputChoice,
    InputRange,
    InputText,
    InputVote,
    OutputMessage,
    OutputScore,
    ListContains,
    ListDeal,
    ListDiscard,
    ListElements,
    ListExtend,
    ListReverse,
    ListShuffle,
    ListSize,
    ListSort,
    LoopFor,
    LoopInParallel,
    LoopParallelFor,
    LoopWhile,
    Match,
    Assignment(AssignmentSpec),
    Timer,
    UpFrom,
}

impl RuleBody {
    /// The kind this body dispatches to.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        match self {
            RuleBody::InputChoice => RuleKind::InputChoice,
            RuleBody::InputRange => RuleKind::InputRange,
            RuleBody::InputText => RuleKind::InputText,
            RuleBody::InputVote => RuleKind::InputVote,
            RuleBody::OutputMessage => RuleKind::OutputMessage,
            RuleBody::OutputScore => RuleKind::OutputScore,
            RuleBody::ListContains => RuleKind::ListContains,
            RuleBody::ListDeal => RuleKind::ListDeal,
            RuleBody::ListDiscard => RuleKind::ListDiscard,
            RuleBody::ListElements => RuleKind::ListElements,
            RuleBody::ListExtend => RuleKind::ListExtend,
            RuleBody::ListReverse => RuleKind::ListReverse,
            RuleBody::ListShuffle => RuleKind::ListShuffle,
            RuleBody::ListSize => RuleKind::ListSize,
            RuleBody::ListSort => RuleKind::ListSort,
            RuleBody::LoopFor => RuleKind::LoopFor,
            RuleBody::LoopInParallel => RuleKind::LoopInParallel,
            RuleBody::LoopParallelFor => RuleKind::LoopParallelFor,
            RuleBody::LoopWhile => RuleKind::LoopWhile,
            RuleBody::Match => RuleKind::Match,
            RuleBody::Assignment(_) => RuleKind::Assignment,
            RuleBody::Timer => RuleKind::Timer,
            RuleBody::UpFrom => RuleKind::UpFrom,
        }
    }

    /// Payload-free body for `kind`.
    ///
    /// Returns `None` for kinds that require a payload.
    #[must_use]
    pub const fn placeholder(kind: RuleKind) -> Option<Self> {
        let body = match kind {
            RuleKind::InputChoice => RuleBody::InputChoice,
            RuleKind::InputRange => RuleBody::InputRange,
            RuleKind::InputText => RuleBody::InputText,
            RuleKind::InputVote => RuleBody::InputVote,
            RuleKind::OutputMessage => RuleBody::OutputMessage,
            RuleKind::OutputScore => RuleBody::OutputScore,
            RuleKind::ListContains => RuleBody::ListContains,
            RuleKind::ListDeal => RuleBody::ListDeal,
            RuleKind::ListDiscard => RuleBody::ListDiscard,
            RuleKind::ListElements => RuleBody::ListElements,
            RuleKind::ListExtend => RuleBody::ListExtend,
            RuleKind::ListReverse => RuleBody::ListReverse,
            RuleKind::ListShuffle => RuleBody::ListShuffle,
            RuleKind::ListSize => RuleBody::ListSize,
            RuleKind::ListSort => RuleBody::ListSort,
            RuleKind::LoopFor => RuleBody::LoopFor,
            RuleKind::LoopInParallel => RuleBody::LoopInParallel,
            RuleKind::LoopParallelFor => RuleBody::LoopParallelFor,
            RuleKind::LoopWhile => RuleBody::LoopWhile,
            RuleKind::Match => RuleBody::Match,
            RuleKind::Timer => RuleBody::Timer,
            RuleKind::UpFrom => RuleBody::UpFrom,
            RuleKind::Assignment => return None,
        };
        Some(body)
    }
}

/// One unit of work for the interpreter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// How many specs this rule expects to find below it on the stack.
    pub nested_rules: usize,
    /// What to run.
    pub body: RuleBody,
}

impl RuleSpec {
    /// Create a new spec.
    #[must_use]
    pub const fn new(nested_rules: usize, body: RuleBody) -> Self {
        Self { nested_rules, body }
    }

    /// Assignment spec with no nested rules.
    pub fn assignment(target: impl Into<String>, value_type: ValueType, value: DataNode) -> Self {
        Self::new(
            0,
            RuleBody::Assignment(AssignmentSpec::new(target, value_type, value)),
        )
    }

    /// Set the nested rule count (builder pattern).
    #[must_use]
    pub fn with_nested(mut self, nested_rules: usize) -> Self {
        self.nested_rules = nested_rules;
        self
    }

    /// The kind this spec dispatches to.
    #[must_use]
    pub const fn kind(&self) -> RuleKind {
        self.body.kind()
    }

    /// Assignment payload, if this is an assignment.
    #[must_use]
    pub fn as_assignment(&self) -> Option<&AssignmentSpec> {
        match &self.body {
            RuleBody::Assignment(a) => Some(a),
            _ => None,
        }
    }
}

/// LIFO stack of rule specs. The top entry executes next.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpecStack {
    /// Index 0 = bottom, last = top.
    entries: Vec<RuleSpec>,
}

impl RuleSpecStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a stack whose pops yield `specs` in the given order.
    pub fn from_execution_order(specs: impl IntoIterator<Item = RuleSpec>) -> Self {
        let mut entries: Vec<RuleSpec> = specs.into_iter().collect();
        entries.reverse();
        Self { entries }
    }

    /// Push a spec onto the top.
    pub fn push(&mut self, spec: RuleSpec) {
        self.entries.push(spec);
    }

    /// Push a sequence so that it executes in the given order.
    ///
    /// The sequence is pushed in reverse: its first element ends up on top.
    pub fn push_in_order(&mut self, specs: impl IntoIterator<Item = RuleSpec>) {
        let specs: Vec<RuleSpec> = specs.into_iter().collect();
        self.entries.extend(specs.into_iter().rev());
    }

    /// Pop the top spec.
    pub fn pop(&mut self) -> Option<RuleSpec> {
        self.entries.pop()
    }

    /// Peek at the top spec without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&RuleSpec> {
        self.entries.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in execution order (top first).
    pub fn iter(&self) -> impl Iterator<Item = &RuleSpec> {
        self.entries.iter().rev()
    }
}
