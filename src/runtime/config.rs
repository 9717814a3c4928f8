//! Runtime configuration parameters.

use serde::{Deserialize, Serialize};

/// Runtime configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Upper bound on passes for `run_until_idle` (0 = unbounded).
    /// Guards hosts against a process that never finishes.
    pub max_passes: u64,

    /// Register the built-in rule handlers on construction.
    pub register_default_rules: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_passes: 10_000,
            register_default_rules: true,
        }
    }
}

impl RuntimeConfig {
    /// Set the pass bound for `run_until_idle`.
    #[must_use]
    pub fn with_max_passes(mut self, max_passes: u64) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Start from an empty handler registry.
    #[must_use]
    pub fn without_default_rules(mut self) -> Self {
        self.register_default_rules = false;
        self
    }

    /// Check if a pass count has reached the bound.
    #[must_use]
    pub fn pass_limit_reached(&self, passes: u64) -> bool {
        self.max_passes != 0 && passes >= self.max_passes
    }
}
