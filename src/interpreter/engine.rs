//! The run-to-suspension loop.

use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::rules::{RuleOutcome, RuleRegistry};

use super::state::InterpreterState;

/// Drives one session's rule specs through the registered handlers.
///
/// ## Run Loop
///
/// Each call to [`Interpreter::run`] repeats:
/// 1. Pop the next spec; an empty stack yields `NoMoreRules`
/// 2. Look up the handler for its kind; none registered yields `InternalFailure`
/// 3. Reject a spec declaring more nested rules than remain on the stack
/// 4. Invoke the handler and stop on any halting outcome
///
/// A single run may execute many specs. It returns only at a suspension
/// point (IO wait) or a terminal one.
#[derive(Debug)]
pub struct Interpreter {
    registry: Rc<RuleRegistry>,
    state: InterpreterState,
}

impl Interpreter {
    /// Create an interpreter over `state` using the shared handler registry.
    pub fn new(state: InterpreterState, registry: Rc<RuleRegistry>) -> Self {
        Self { registry, state }
    }

    /// Execute specs until a halting outcome, then record and return it.
    pub fn run(&mut self) -> RuleOutcome {
        let outcome = loop {
            let Some(spec) = self.state.next_spec() else {
                break RuleOutcome::NoMoreRules;
            };
            let kind = spec.kind();

            let Some(handler) = self.registry.get(kind) else {
                warn!(%kind, "no handler registered for rule kind");
                break RuleOutcome::InternalFailure;
            };

            let remaining = self.state.remaining();
            if spec.nested_rules > remaining {
                warn!(
                    %kind,
                    declared = spec.nested_rules,
                    remaining,
                    "rule declares more nested rules than remain on the stack"
                );
                break RuleOutcome::InternalFailure;
            }

            trace!(%kind, remaining, "executing rule");
            let outcome = handler.execute(&spec, &mut self.state);
            if outcome.halts() {
                break outcome;
            }
        };

        debug!(%outcome, remaining = self.state.remaining(), "interpreter run halted");
        self.state.set_last_outcome(outcome);
        outcome
    }

    /// Outcome of the most recent run, or `None` if never run.
    #[must_use]
    pub fn last_outcome(&self) -> Option<RuleOutcome> {
        self.state.last_outcome()
    }

    #[must_use]
    pub fn state(&self) -> &InterpreterState {
        &self.state
    }

    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{RuleBody, RuleKind, RuleSpec, RuleSpecStack};

    fn interpreter(specs: Vec<RuleSpec>, registry: RuleRegistry) -> Interpreter {
        let state = InterpreterState::detached(RuleSpecStack::from_execution_order(specs));
        Interpreter::new(state, Rc::new(registry))
    }

    #[test]
    fn test_empty_stack_is_no_more_rules() {
        let mut interp = interpreter(vec![], RuleRegistry::new());
        assert_eq!(interp.last_outcome(), None);
        assert_eq!(interp.run(), RuleOutcome::NoMoreRules);
        assert_eq!(interp.last_outcome(), Some(RuleOutcome::NoMoreRules));
    }

    #[test]
    fn test_unregistered_kind_fails() {
        let mut interp = interpreter(vec![RuleSpec::new(0, RuleBody::Match)], RuleRegistry::new());
        assert_eq!(interp.run(), RuleOutcome::InternalFailure);
        assert_eq!(interp.state().remaining(), 0);
    }

    #[test]
    fn test_nested_count_guard_skips_handler() {
        let mut registry = RuleRegistry::new();
        registry.register(RuleKind::Timer, |_: &RuleSpec, _: &mut InterpreterState| {
            RuleOutcome::WaitingForInput
        });

        let specs = vec![
            RuleSpec::new(2, RuleBody::Timer),
            RuleSpec::new(0, RuleBody::Timer),
        ];
        let mut interp = interpreter(specs, registry);

        // only one spec remains below, two are declared
        assert_eq!(interp.run(), RuleOutcome::InternalFailure);
        assert_eq!(interp.state().remaining(), 1);
    }
}
