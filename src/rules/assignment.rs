//! Assignment rule: writes a value into the session's variables.

use tracing::debug;

use crate::data::{DataError, DataNode, DataResult, GameData, NodeKind};
use crate::interpreter::InterpreterState;

use super::handler::RuleHandler;
use super::kind::ValueType;
use super::outcome::RuleOutcome;
use super::spec::{AssignmentSpec, RuleSpec};

/// Handler for [`RuleKind::Assignment`](super::RuleKind::Assignment).
///
/// Literal values must match their declared type. Identifier values name a
/// constant (searched first) or variable whose current value is copied.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssignmentRule;

impl AssignmentRule {
    fn resolve(assignment: &AssignmentSpec, data: &GameData) -> DataResult<DataNode> {
        if assignment.value_type != ValueType::Identifier {
            return Ok(assignment.value.clone());
        }
        let source = assignment.value.as_text()?;
        if data.constants.contains(source)? {
            return data.constants.get(source).cloned();
        }
        data.variables.get(source).cloned()
    }

    fn apply(assignment: &AssignmentSpec, data: &mut GameData) -> DataResult<()> {
        let value = Self::resolve(assignment, data)?;
        data.variables.set(assignment.target.clone(), value)
    }
}

impl RuleHandler for AssignmentRule {
    fn execute(&self, spec: &RuleSpec, state: &mut InterpreterState) -> RuleOutcome {
        let Some(assignment) = spec.as_assignment() else {
            debug!(kind = %spec.kind(), "assignment handler given a non-assignment spec");
            return RuleOutcome::InternalFailure;
        };

        if assignment.value_type != ValueType::Identifier
            && !assignment.value_type.matches(&assignment.value)
        {
            let demanded = assignment.value_type.node_kind().unwrap_or(NodeKind::Unset);
            let err = DataError::WrongType {
                demanded,
                actual: assignment.value.kind(),
            };
            debug!(variable = %assignment.target, %err, "assignment type mismatch");
            return RuleOutcome::InternalFailure;
        }

        match state.with_session(|session| Self::apply(assignment, session.game_data_mut())) {
            Some(Ok(())) => RuleOutcome::SuccessWithNoNestedRemaining,
            Some(Err(err)) => {
                debug!(variable = %assignment.target, %err, "assignment failed");
                RuleOutcome::InternalFailure
            }
            None => {
                debug!(variable = %assignment.target, "assignment has no session to write to");
                RuleOutcome::InternalFailure
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Configuration, GameStateObject, Range, Session, SessionId, SharedSession};
    use crate::rules::{RuleBody, RuleSpecStack};

    fn shared_session() -> SharedSession {
        let mut constants = GameStateObject::new();
        constants.set("max_rounds", DataNode::int(5)).unwrap();
        let mut variables = GameStateObject::new();
        variables.set("winner", DataNode::text("nobody")).unwrap();

        let config = Configuration::with_fields("Test", Range::new(1, 4), false);
        let data = GameData::new(config)
            .with_constants(constants)
            .with_variables(variables);
        Session::new(SessionId::new(1), data, "JOIN01").into_shared()
    }

    fn run(spec: RuleSpec, session: &SharedSession) -> RuleOutcome {
        let mut state = InterpreterState::new(RuleSpecStack::new(), session);
        AssignmentRule.execute(&spec, &mut state)
    }

    fn variable(session: &SharedSession, name: &str) -> DataResult<DataNode> {
        session.borrow().game_data().variables.get(name).cloned()
    }

    #[test]
    fn test_literal_assignment() {
        let session = shared_session();
        let spec = RuleSpec::assignment("round", ValueType::Number, DataNode::int(1));
        assert_eq!(run(spec, &session), RuleOutcome::SuccessWithNoNestedRemaining);
        assert_eq!(variable(&session, "round"), Ok(DataNode::int(1)));
    }

    #[test]
    fn test_overwrites_existing_variable() {
        let session = shared_session();
        let spec = RuleSpec::assignment("winner", ValueType::String, DataNode::text("ada"));
        assert_eq!(run(spec, &session), RuleOutcome::SuccessWithNoNestedRemaining);
        assert_eq!(variable(&session, "winner"), Ok(DataNode::text("ada")));
    }

    #[test]
    fn test_declared_type_mismatch_fails() {
        let session = shared_session();
        let spec = RuleSpec::assignment("round", ValueType::Number, DataNode::text("one"));
        assert_eq!(run(spec, &session), RuleOutcome::InternalFailure);
        assert!(variable(&session, "round").is_err());
    }

    #[test]
    fn test_identifier_copies_constant_then_variable() {
        let session = shared_session();
        let from_constant =
            RuleSpec::assignment("rounds_left", ValueType::Identifier, DataNode::text("max_rounds"));
        assert_eq!(run(from_constant, &session), RuleOutcome::SuccessWithNoNestedRemaining);
        assert_eq!(variable(&session, "rounds_left"), Ok(DataNode::int(5)));

        let from_variable =
            RuleSpec::assignment("previous", ValueType::Identifier, DataNode::text("winner"));
        assert_eq!(run(from_variable, &session), RuleOutcome::SuccessWithNoNestedRemaining);
        assert_eq!(variable(&session, "previous"), Ok(DataNode::text("nobody")));
    }

    #[test]
    fn test_unresolved_identifier_fails() {
        let session = shared_session();
        let spec = RuleSpec::assignment("x", ValueType::Identifier, DataNode::text("missing"));
        assert_eq!(run(spec, &session), RuleOutcome::InternalFailure);
    }

    #[test]
    fn test_dropped_session_fails() {
        let session = shared_session();
        let mut state = InterpreterState::new(RuleSpecStack::new(), &session);
        drop(session);
        let spec = RuleSpec::assignment("round", ValueType::Number, DataNode::int(1));
        assert_eq!(AssignmentRule.execute(&spec, &mut state), RuleOutcome::InternalFailure);
    }

    #[test]
    fn test_wrong_spec_kind_fails() {
        let session = shared_session();
        assert_eq!(run(RuleSpec::new(0, RuleBody::Timer), &session), RuleOutcome::InternalFailure);
    }
}
