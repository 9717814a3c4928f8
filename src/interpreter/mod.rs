//! Rule interpreter.
//!
//! An [`Interpreter`] owns one session's [`InterpreterState`] and a shared
//! [`RuleRegistry`](crate::rules::RuleRegistry). Each [`Interpreter::run`]
//! executes specs until a handler suspends on IO or the stack is exhausted;
//! this is the unit of work the scheduler ticks.
//!
//! ## Example Usage
//!
//! ```
//! use std::rc::Rc;
//! use social_game_engine::data::{DataNode, GameData, Session, SessionId};
//! use social_game_engine::interpreter::{Interpreter, InterpreterState};
//! use social_game_engine::rules::{RuleOutcome, RuleRegistry, RuleSpec, RuleSpecStack, ValueType};
//!
//! let session = Session::new(SessionId::new(1), GameData::default(), "ABCDEF").into_shared();
//! let stack = RuleSpecStack::from_execution_order([
//!     RuleSpec::assignment("round", ValueType::Number, DataNode::int(1)),
//! ]);
//!
//! let registry = Rc::new(RuleRegistry::with_default_rules());
//! let mut interpreter = Interpreter::new(InterpreterState::new(stack, &session), registry);
//!
//! assert_eq!(interpreter.run(), RuleOutcome::NoMoreRules);
//! assert_eq!(
//!     session.borrow().game_data().variables.get("round"),
//!     Ok(&DataNode::int(1))
//! );
//! ```

mod engine;
mod state;

pub use engine::Interpreter;
pub use state::InterpreterState;
