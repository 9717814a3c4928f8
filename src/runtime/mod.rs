//! Host-side process manager.
//!
//! [`GameRuntime`] owns the handler registry and a [`Scheduler`] of
//! [`GameProcess`]es. The server registers handlers at startup, spawns a
//! process per session, and calls [`GameRuntime::update`] once per
//! iteration of its main loop.
//!
//! ## Example Usage
//!
//! ```
//! use social_game_engine::data::{DataNode, GameData, Session, SessionId};
//! use social_game_engine::rules::{RuleSpec, RuleSpecStack, ValueType};
//! use social_game_engine::runtime::{GameRuntime, RuntimeConfig};
//!
//! let mut runtime = GameRuntime::new(RuntimeConfig::default());
//!
//! let session = Session::new(SessionId::new(1), GameData::default(), "ROCKPS").into_shared();
//! let stack = RuleSpecStack::from_execution_order([
//!     RuleSpec::assignment("round", ValueType::Number, DataNode::int(1)),
//! ]);
//! assert!(runtime.spawn(&session, stack));
//!
//! let passes = runtime.run_until_idle();
//! assert_eq!(passes, 1);
//! assert!(!runtime.has_processes());
//! ```

mod config;

pub use config::RuntimeConfig;

use std::rc::Rc;

use tracing::{info, warn};

use crate::data::{SessionId, SharedSession};
use crate::process::GameProcess;
use crate::rules::{RuleHandler, RuleKind, RuleRegistry, RuleSpecStack};
use crate::scheduler::{PassSummary, ProcessId, Scheduler};

/// Registry, scheduler, and configuration for one server.
#[derive(Debug)]
pub struct GameRuntime {
    config: RuntimeConfig,
    registry: Rc<RuleRegistry>,
    scheduler: Scheduler<GameProcess>,
    /// Set by the first spawn; the registry is read-only from then on.
    sealed: bool,
}

impl GameRuntime {
    /// Create a runtime.
    pub fn new(config: RuntimeConfig) -> Self {
        let registry = if config.register_default_rules {
            RuleRegistry::with_default_rules()
        } else {
            RuleRegistry::new()
        };
        Self {
            config,
            registry: Rc::new(registry),
            scheduler: Scheduler::new(),
            sealed: false,
        }
    }

    /// Register a handler for `kind`.
    ///
    /// Returns `false` if `kind` is already handled, or if any process has
    /// ever been spawned and the registry is therefore fixed.
    pub fn register_rule(&mut self, kind: RuleKind, handler: impl RuleHandler + 'static) -> bool {
        if self.sealed {
            warn!(%kind, "rule registry is fixed after the first spawn");
            return false;
        }
        match Rc::get_mut(&mut self.registry) {
            Some(registry) => registry.register(kind, handler),
            None => {
                warn!(%kind, "rule registry is shared and cannot be modified");
                false
            }
        }
    }

    /// Start a process executing `stack` against `session`.
    ///
    /// Returns `false` if the session already has a live process, or if
    /// the session is mutably borrowed.
    pub fn spawn(&mut self, session: &SharedSession, stack: RuleSpecStack) -> bool {
        let Some(process) = GameProcess::new(session, stack, Rc::clone(&self.registry)) else {
            warn!("cannot spawn a process while its session is mutably borrowed");
            return false;
        };
        self.sealed = true;
        let session_id = process.session_id();
        let added = self.scheduler.add_process(process);
        if added {
            info!(%session_id, "game process spawned");
        }
        added
    }

    /// Run one scheduler pass. Call once per server loop iteration.
    pub fn update(&mut self) -> PassSummary {
        self.scheduler.run_one_pass()
    }

    /// Run passes until no process remains or the pass bound is hit.
    ///
    /// Returns the number of passes run.
    pub fn run_until_idle(&mut self) -> u64 {
        let mut passes = 0;
        while self.scheduler.has_processes() {
            if self.config.pass_limit_reached(passes) {
                warn!(passes, remaining = self.scheduler.len(), "pass limit reached before idle");
                return passes;
            }
            self.scheduler.run_one_pass();
            passes += 1;
        }
        info!(passes, "runtime idle");
        passes
    }

    /// Clear the IO wait of a session's process after its IO was handled.
    pub fn resume(&mut self, session_id: SessionId) -> bool {
        self.scheduler
            .get_mut(Self::process_id(session_id))
            .is_some_and(GameProcess::resume)
    }

    /// Stop driving a session's process, returning it.
    pub fn cancel(&mut self, session_id: SessionId) -> Option<GameProcess> {
        self.scheduler.remove_process(Self::process_id(session_id))
    }

    /// Get a session's live process.
    #[must_use]
    pub fn process(&self, session_id: SessionId) -> Option<&GameProcess> {
        self.scheduler.get(Self::process_id(session_id))
    }

    #[must_use]
    pub fn has_processes(&self) -> bool {
        self.scheduler.has_processes()
    }

    #[must_use]
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler<GameProcess> {
        &self.scheduler
    }

    fn process_id(session_id: SessionId) -> ProcessId {
        ProcessId::new(session_id.raw())
    }
}

impl Default for GameRuntime {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}
