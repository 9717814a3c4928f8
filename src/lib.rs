//! # social-game-engine
//!
//! Rule-execution engine for a social/party game server.
//!
//! ## Design Principles
//!
//! 1. **Closed Data Model**: All game state is a [`DataNode`], a recursive
//!    tagged value. Accessors never coerce between variants.
//!
//! 2. **Pluggable Rules**: The interpreter knows nothing about what a rule
//!    does. One [`RuleHandler`] per [`RuleKind`] is registered at startup;
//!    handlers report progress through [`RuleOutcome`] only.
//!
//! 3. **Cooperative Scheduling**: Many sessions are multiplexed in one
//!    control loop. A process runs until it suspends on IO or finishes;
//!    nothing blocks and nothing is preempted.
//!
//! ## Architecture
//!
//! ```text
//! parser ─► RuleSpecStack ─► InterpreterState ─► Interpreter ─► GameProcess
//!                                  │                                │
//!                                  └── Weak ─► Session              ▼
//!                                                         Scheduler (ready / IO-bound)
//! ```
//!
//! ## Modules
//!
//! - `data`: Value model, configuration, state objects, sessions
//! - `rules`: Rule kinds, specs, outcomes, handlers
//! - `interpreter`: Interpreter state and the run loop
//! - `scheduler`: Process contract and the cooperative scheduler
//! - `process`: Game process adapter
//! - `runtime`: Host-side process manager and its configuration

pub mod data;
pub mod rules;
pub mod interpreter;
pub mod scheduler;
pub mod process;
pub mod runtime;

// Re-export commonly used types
pub use crate::data::{
    DataNode, DataError, DataResult, NodeKind, Range,
    Configuration, GameStateObject, GameData, Session, SessionId, SharedSession, Player,
};

pub use crate::rules::{
    RuleKind, ValueType, RuleSpec, RuleBody, AssignmentSpec, RuleSpecStack,
    RuleOutcome, RuleHandler, RuleRegistry, AssignmentRule,
};

pub use crate::interpreter::{Interpreter, InterpreterState};

pub use crate::scheduler::{Process, ProcessId, Scheduler, PassSummary};

pub use crate::process::GameProcess;

pub use crate::runtime::{GameRuntime, RuntimeConfig};
