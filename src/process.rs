//! Game process: one session's interpreter as a schedulable [`Process`].

use std::rc::Rc;

use crate::data::{SessionId, SharedSession};
use crate::interpreter::{Interpreter, InterpreterState};
use crate::rules::{RuleOutcome, RuleRegistry, RuleSpecStack};
use crate::scheduler::{Process, ProcessId};

/// Binds a session and its interpreter into the scheduler's contract.
///
/// ## Behavior
///
/// - `id()`: Derived from the session id, stable for the process lifetime
/// - `tick()`: One full interpreter run; the outcome is cached
/// - `is_waiting_for_io()`: Cached outcome is an IO wait
/// - `is_done()`: Cached outcome is terminal
///
/// Before the first tick, or after [`GameProcess::resume`], there is no
/// cached outcome and the process is ready.
#[derive(Debug)]
pub struct GameProcess {
    session_id: SessionId,
    interpreter: Interpreter,
    outcome: Option<RuleOutcome>,
}

impl GameProcess {
    /// Create a process running `stack` against `session`.
    ///
    /// Returns `None` if `session` is mutably borrowed, since its id cannot
    /// be read.
    pub fn new(
        session: &SharedSession,
        stack: RuleSpecStack,
        registry: Rc<RuleRegistry>,
    ) -> Option<Self> {
        let session_id = session.try_borrow().ok()?.id();
        let state = InterpreterState::new(stack, session);
        Some(Self {
            session_id,
            interpreter: Interpreter::new(state, registry),
            outcome: None,
        })
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Outcome cached by the most recent tick.
    #[must_use]
    pub fn outcome(&self) -> Option<RuleOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Clear an IO wait once the pending input or output has been handled.
    ///
    /// Returns `false` if the process was not waiting on IO.
    pub fn resume(&mut self) -> bool {
        if !self.is_waiting_for_io() {
            return false;
        }
        self.outcome = None;
        true
    }
}

impl Process for GameProcess {
    fn id(&self) -> ProcessId {
        ProcessId::new(self.session_id.raw())
    }

    fn tick(&mut self) {
        self.outcome = Some(self.interpreter.run());
    }

    fn is_waiting_for_io(&self) -> bool {
        self.outcome.is_some_and(RuleOutcome::is_io_wait)
    }

    fn is_done(&self) -> bool {
        self.outcome.is_some_and(RuleOutcome::is_terminal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataNode, GameData, Session};
    use crate::rules::{RuleBody, RuleKind, RuleSpec, ValueType};

    fn registry() -> Rc<RuleRegistry> {
        let mut registry = RuleRegistry::with_default_rules();
        registry.register(RuleKind::InputText, |_: &RuleSpec, _: &mut InterpreterState| {
            RuleOutcome::WaitingForInput
        });
        Rc::new(registry)
    }

    fn session(id: u32) -> SharedSession {
        Session::new(SessionId::new(id), GameData::default(), "QWERTY").into_shared()
    }

    #[test]
    fn test_fresh_process_is_ready() {
        let session = session(12);
        let process = GameProcess::new(&session, RuleSpecStack::new(), registry()).unwrap();
        assert_eq!(process.id(), ProcessId::new(12));
        assert_eq!(process.session_id(), SessionId::new(12));
        assert_eq!(process.outcome(), None);
        assert!(!process.is_done());
        assert!(!process.is_waiting_for_io());
    }

    #[test]
    fn test_tick_runs_to_suspension_then_completion() {
        let session = session(1);
        let stack = RuleSpecStack::from_execution_order([
            RuleSpec::assignment("a", ValueType::Number, DataNode::int(1)),
            RuleSpec::new(0, RuleBody::InputText),
            RuleSpec::assignment("b", ValueType::Number, DataNode::int(2)),
        ]);
        let mut process = GameProcess::new(&session, stack, registry()).unwrap();

        process.tick();
        assert!(process.is_waiting_for_io());
        assert!(!process.is_done());
        assert_eq!(process.interpreter().state().remaining(), 1);

        assert!(process.resume());
        assert!(!process.is_waiting_for_io());
        assert!(!process.resume());

        process.tick();
        assert_eq!(process.outcome(), Some(RuleOutcome::NoMoreRules));
        assert!(process.is_done());

        let data = session.borrow();
        assert_eq!(data.game_data().variables.get("b"), Ok(&DataNode::int(2)));
    }

    #[test]
    fn test_failure_is_done() {
        let session = session(2);
        let stack = RuleSpecStack::from_execution_order([RuleSpec::new(0, RuleBody::ListSort)]);
        let mut process = GameProcess::new(&session, stack, registry()).unwrap();
        process.tick();
        assert_eq!(process.outcome(), Some(RuleOutcome::InternalFailure));
        assert!(process.is_done());
        assert!(!process.is_waiting_for_io());
    }

    #[test]
    fn test_new_fails_while_session_mutably_borrowed() {
        let session = session(3);
        let guard = session.borrow_mut();
        assert!(GameProcess::new(&session, RuleSpecStack::new(), registry()).is_none());
        drop(guard);
        assert!(GameProcess::new(&session, RuleSpecStack::new(), registry()).is_some());
    }
}
