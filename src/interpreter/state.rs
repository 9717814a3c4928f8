//! Per-session execution context.

use std::cell::RefCell;
use std::rc::Weak;

use crate::data::{Session, SessionId, SharedSession};
use crate::rules::{RuleOutcome, RuleSpec, RuleSpecStack};

/// Mutable context one interpreter executes against.
///
/// Owns the remaining rule specs and the last outcome. The session is held
/// as a `Weak` back-reference: the host owns it and must keep it alive for
/// as long as rules should be able to touch it.
#[derive(Debug)]
pub struct InterpreterState {
    stack: RuleSpecStack,
    session: Weak<RefCell<Session>>,
    /// `None` until the first run completes.
    last_outcome: Option<RuleOutcome>,
}

impl InterpreterState {
    /// Create a state executing `stack` against `session`.
    pub fn new(stack: RuleSpecStack, session: &SharedSession) -> Self {
        Self {
            stack,
            session: std::rc::Rc::downgrade(session),
            last_outcome: None,
        }
    }

    /// Create a state with no session attached.
    ///
    /// Handlers that need session data will fail.
    pub fn detached(stack: RuleSpecStack) -> Self {
        Self {
            stack,
            session: Weak::new(),
            last_outcome: None,
        }
    }

    // === Rule specs ===

    /// Pop the next spec to execute.
    pub fn next_spec(&mut self) -> Option<RuleSpec> {
        self.stack.pop()
    }

    /// Push a single spec; it executes next.
    pub fn push_spec(&mut self, spec: RuleSpec) {
        self.stack.push(spec);
    }

    /// Push nested specs given in execution order.
    ///
    /// They run in that order, before anything already on the stack.
    pub fn push_nested(&mut self, specs: impl IntoIterator<Item = RuleSpec>) {
        self.stack.push_in_order(specs);
    }

    /// Number of specs still waiting.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.stack.len()
    }

    /// The spec that executes next.
    #[must_use]
    pub fn peek(&self) -> Option<&RuleSpec> {
        self.stack.peek()
    }

    /// The remaining stack.
    #[must_use]
    pub fn stack(&self) -> &RuleSpecStack {
        &self.stack
    }

    // === Session ===

    /// Strong handle to the session, if it is still alive.
    #[must_use]
    pub fn session(&self) -> Option<SharedSession> {
        self.session.upgrade()
    }

    /// Id of the session, if it is still alive and not mutably borrowed.
    #[must_use]
    pub fn session_id(&self) -> Option<SessionId> {
        let session = self.session.upgrade()?;
        let id = session.try_borrow().ok()?.id();
        Some(id)
    }

    /// Run `f` with mutable access to the session.
    ///
    /// Returns `None` if the session was dropped or is already borrowed.
    pub fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let session = self.session.upgrade()?;
        let mut guard = session.try_borrow_mut().ok()?;
        Some(f(&mut guard))
    }

    // === Outcome ===

    /// Outcome of the most recent run, or `None` if never run.
    #[must_use]
    pub fn last_outcome(&self) -> Option<RuleOutcome> {
        self.last_outcome
    }

    pub(crate) fn set_last_outcome(&mut self, outcome: RuleOutcome) {
        self.last_outcome = Some(outcome);
    }
}
