//! Ready and IO-bound pools.

use tracing::{debug, trace, warn};

use super::{Process, ProcessId};

/// What one driving pass did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Processes ticked this pass.
    pub ticked: usize,
    /// Processes moved from the IO-bound pool back to ready.
    pub resumed: usize,
    /// Processes parked in the IO-bound pool.
    pub parked: usize,
    /// Processes dropped because they reported done, in pool order.
    pub finished: Vec<ProcessId>,
}

/// Round-robin scheduler over any [`Process`].
///
/// ## Pass Order
///
/// 1. IO-bound processes that no longer wait on IO return to the ready pool
/// 2. For a snapshot of the ready pool, each process is:
///    - parked if it waits on IO (not ticked this pass)
///    - dropped if it is done
///    - otherwise ticked once, and dropped right away if that finished it
///
/// Identity is [`Process::id`]; duplicate ids are rejected on insert.
#[derive(Debug)]
pub struct Scheduler<P: Process> {
    ready: Vec<P>,
    io_bound: Vec<P>,
    passes: u64,
}

impl<P: Process> Default for Scheduler<P> {
    fn default() -> Self {
        Self {
            ready: Vec::new(),
            io_bound: Vec::new(),
            passes: 0,
        }
    }
}

impl<P: Process> Scheduler<P> {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a process to the ready pool.
    ///
    /// Returns `false` (and drops the process) if its id is already scheduled.
    pub fn add_process(&mut self, process: P) -> bool {
        let id = process.id();
        if self.contains(id) {
            warn!(%id, "process id already scheduled; ignoring");
            return false;
        }
        debug!(%id, "process added");
        self.ready.push(process);
        true
    }

    /// Remove a process from whichever pool holds it.
    pub fn remove_process(&mut self, id: ProcessId) -> Option<P> {
        for pool in [&mut self.ready, &mut self.io_bound] {
            if let Some(index) = pool.iter().position(|p| p.id() == id) {
                debug!(%id, "process removed");
                return Some(pool.remove(index));
            }
        }
        None
    }

    /// Run one driving pass.
    pub fn run_one_pass(&mut self) -> PassSummary {
        let mut summary = PassSummary::default();

        let (still_waiting, resumed): (Vec<P>, Vec<P>) = std::mem::take(&mut self.io_bound)
            .into_iter()
            .partition(|p| p.is_waiting_for_io());
        self.io_bound = still_waiting;
        summary.resumed = resumed.len();
        for process in &resumed {
            debug!(id = %process.id(), "process resumed from IO wait");
        }
        self.ready.extend(resumed);

        let snapshot = std::mem::take(&mut self.ready);
        for mut process in snapshot {
            if process.is_waiting_for_io() {
                debug!(id = %process.id(), "process parked on IO");
                summary.parked += 1;
                self.io_bound.push(process);
                continue;
            }
            if !process.is_done() {
                process.tick();
                summary.ticked += 1;
            }
            if process.is_done() {
                debug!(id = %process.id(), "process finished");
                summary.finished.push(process.id());
                continue;
            }
            self.ready.push(process);
        }

        self.passes += 1;
        trace!(
            pass = self.passes,
            ticked = summary.ticked,
            resumed = summary.resumed,
            parked = summary.parked,
            finished = summary.finished.len(),
            "scheduler pass complete"
        );
        summary
    }

    /// Check if any process remains in either pool.
    #[must_use]
    pub fn has_processes(&self) -> bool {
        !self.ready.is_empty() || !self.io_bound.is_empty()
    }

    /// Check if a process with `id` is scheduled.
    #[must_use]
    pub fn contains(&self, id: ProcessId) -> bool {
        self.ready.iter().chain(&self.io_bound).any(|p| p.id() == id)
    }

    /// Get a scheduled process by id.
    #[must_use]
    pub fn get(&self, id: ProcessId) -> Option<&P> {
        self.ready.iter().chain(&self.io_bound).find(|p| p.id() == id)
    }

    /// Get a mutable scheduled process by id.
    pub fn get_mut(&mut self, id: ProcessId) -> Option<&mut P> {
        self.ready
            .iter_mut()
            .chain(&mut self.io_bound)
            .find(|p| p.id() == id)
    }

    /// Total processes across both pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ready.len() + self.io_bound.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_processes()
    }

    #[must_use]
    pub fn ready_len(&self) -> usize {
        self.ready.len()
    }

    #[must_use]
    pub fn io_bound_len(&self) -> usize {
        self.io_bound.len()
    }

    /// Passes run so far.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }
}
