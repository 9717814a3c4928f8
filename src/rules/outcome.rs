//! Outcomes of executing a rule.
//!
//! This enumeration is the whole transition alphabet of the interpreter:
//! every handler returns exactly one of these, and the scheduler classifies
//! processes by the last one seen.

use serde::{Deserialize, Serialize};

/// Result of executing one rule, or of one interpreter run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleOutcome {
    /// Execution failed; the process stops.
    InternalFailure,
    /// The rule-spec stack is exhausted.
    NoMoreRules,
    /// Success; waiting for player input.
    WaitingForInput,
    /// Success; waiting for an output to be published.
    DeliveringOutput,
    /// Success; nested rules were pushed and remain to run.
    SuccessWithNestedRemaining,
    /// Success; nothing nested remains.
    SuccessWithNoNestedRemaining,
}

impl RuleOutcome {
    /// Check if the run loop stops on this outcome.
    #[must_use]
    pub const fn halts(self) -> bool {
        !matches!(
            self,
            RuleOutcome::SuccessWithNestedRemaining | RuleOutcome::SuccessWithNoNestedRemaining
        )
    }

    /// Check if this outcome suspends the process on IO.
    #[must_use]
    pub const fn is_io_wait(self) -> bool {
        matches!(
            self,
            RuleOutcome::WaitingForInput | RuleOutcome::DeliveringOutput
        )
    }

    /// Check if this outcome ends the process.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, RuleOutcome::NoMoreRules | RuleOutcome::InternalFailure)
    }
}

impl std::fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RuleOutcome::InternalFailure => "internal failure",
            RuleOutcome::NoMoreRules => "no more rules",
            RuleOutcome::WaitingForInput => "waiting for input",
            RuleOutcome::DeliveringOutput => "delivering output",
            RuleOutcome::SuccessWithNestedRemaining => "success, nested rules remaining",
            RuleOutcome::SuccessWithNoNestedRemaining => "success",
        };
        f.write_str(name)
    }
}
