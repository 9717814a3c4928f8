//! Cooperative multi-process scheduler.
//!
//! The server's update loop calls [`Scheduler::run_one_pass`] once per
//! iteration. A pass ticks every ready process exactly once; a process that
//! reports an IO wait is parked until it no longer does, and a process that
//! reports done is dropped for good.
//!
//! ## Design Philosophy
//!
//! Execution is single-threaded and non-preemptive. A tick is whatever unit
//! of work the process defines: for a game process it is one full
//! interpreter run, which may execute many rules. A process that never
//! reports done or IO wait is ticked forever; bounding work is the
//! process's responsibility, not the scheduler's.
//!
//! ## Example Usage
//!
//! ```
//! use social_game_engine::scheduler::{Process, ProcessId, Scheduler};
//!
//! struct Countdown { id: u32, left: u32 }
//!
//! impl Process for Countdown {
//!     fn id(&self) -> ProcessId { ProcessId::new(self.id) }
//!     fn tick(&mut self) { self.left -= 1; }
//!     fn is_waiting_for_io(&self) -> bool { false }
//!     fn is_done(&self) -> bool { self.left == 0 }
//! }
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.add_process(Countdown { id: 0, left: 3 });
//!
//! let mut passes = 0;
//! while scheduler.has_processes() {
//!     scheduler.run_one_pass();
//!     passes += 1;
//! }
//! assert_eq!(passes, 3);
//! ```

mod pool;

pub use pool::{PassSummary, Scheduler};

use serde::{Deserialize, Serialize};

/// Stable identifier of a scheduled process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProcessId(pub u32);

impl ProcessId {
    /// Create a new process ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Process({})", self.0)
    }
}

/// Capabilities the scheduler needs from anything it drives.
pub trait Process {
    /// Identity, stable for the lifetime of the process.
    fn id(&self) -> ProcessId;

    /// Advance by one unit of work. Must not block.
    fn tick(&mut self);

    /// Check if the process is suspended on input or output.
    fn is_waiting_for_io(&self) -> bool;

    /// Check if the process has finished and should never be ticked again.
    fn is_done(&self) -> bool;
}
