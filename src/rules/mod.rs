//! Rule specifications, outcomes, and handlers.
//!
//! ## Key Components
//!
//! - [`RuleKind`]: Closed set of rule kinds, the dispatch key
//! - [`RuleSpec`]: One unit of work, tagged by its [`RuleBody`]
//! - [`RuleSpecStack`]: LIFO stack of specs awaiting execution
//! - [`RuleOutcome`]: The interpreter's transition alphabet
//! - [`RuleHandler`]: Executes specs of one kind
//! - [`RuleRegistry`]: One handler per kind, fixed after setup
//!
//! ## Example Usage
//!
//! ```
//! use social_game_engine::interpreter::InterpreterState;
//! use social_game_engine::rules::{RuleKind, RuleOutcome, RuleRegistry, RuleSpec};
//!
//! let mut registry = RuleRegistry::with_default_rules();
//!
//! // Kinds can be handled by closures too
//! let timer = |_: &RuleSpec, _: &mut InterpreterState| RuleOutcome::WaitingForInput;
//! assert!(registry.register(RuleKind::Timer, timer));
//!
//! // A kind can only be registered once
//! let again = |_: &RuleSpec, _: &mut InterpreterState| RuleOutcome::InternalFailure;
//! assert!(!registry.register(RuleKind::Timer, again));
//! ```

mod assignment;
mod handler;
mod kind;
mod outcome;
mod spec;

pub use assignment::AssignmentRule;
pub use handler::{RuleHandler, RuleRegistry};
pub use kind::{RuleKind, ValueType};
pub use outcome::RuleOutcome;
pub use spec::{AssignmentSpec, RuleBody, RuleSpec, RuleSpecStack};
