//! Rule handlers and the registry mapping kinds to them.
//!
//! The host registers one handler per [`RuleKind`] before driving any
//! process, then shares the registry (behind an `Rc`) with every
//! interpreter. Once shared, the registry is read-only.

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::interpreter::InterpreterState;

use super::assignment::AssignmentRule;
use super::kind::RuleKind;
use super::outcome::RuleOutcome;
use super::spec::RuleSpec;

/// Executes rules of one kind.
///
/// ## Contract
///
/// - Never panic; encode every failure as [`RuleOutcome::InternalFailure`].
/// - Push nested specs with [`InterpreterState::push_nested`], which takes
///   them in execution order and handles the LIFO reversal.
/// - Return [`RuleOutcome::WaitingForInput`] or
///   [`RuleOutcome::DeliveringOutput`] instead of blocking on IO.
pub trait RuleHandler {
    /// Execute `spec` against the interpreter state.
    fn execute(&self, spec: &RuleSpec, state: &mut InterpreterState) -> RuleOutcome;
}

impl<F> RuleHandler for F
where
    F: Fn(&RuleSpec, &mut InterpreterState) -> RuleOutcome,
{
    fn execute(&self, spec: &RuleSpec, state: &mut InterpreterState) -> RuleOutcome {
        self(spec, state)
    }
}

/// One handler per rule kind.
#[derive(Default)]
pub struct RuleRegistry {
    handlers: FxHashMap<RuleKind, Box<dyn RuleHandler>>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in handlers registered.
    pub fn with_default_rules() -> Self {
        let mut registry = Self::new();
        registry.register(RuleKind::Assignment, AssignmentRule);
        registry
    }

    /// Register a handler for `kind`.
    ///
    /// Returns `false` and keeps the existing handler if `kind` is taken.
    pub fn register(&mut self, kind: RuleKind, handler: impl RuleHandler + 'static) -> bool {
        if self.handlers.contains_key(&kind) {
            warn!(%kind, "duplicate rule handler registration ignored");
            return false;
        }
        self.handlers.insert(kind, Box::new(handler));
        true
    }

    /// Get the handler for `kind`.
    #[must_use]
    pub fn get(&self, kind: RuleKind) -> Option<&dyn RuleHandler> {
        self.handlers.get(&kind).map(|h| h.as_ref())
    }

    #[must_use]
    pub fn is_registered(&self, kind: RuleKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered kinds, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<RuleKind> {
        let mut kinds: Vec<_> = self.handlers.keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("kinds", &self.kinds())
            .finish()
    }
}
