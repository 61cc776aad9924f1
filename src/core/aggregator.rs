//! # Result aggregation: intake collector and run counters.
//!
//! One collector task drains the bounded intake channel into an ordered
//! list; two atomic counters track attempts and failures across all workers.
//!
//! ## Architecture
//! ```text
//! worker 0 ──┐
//! worker 1 ──┼── send(AttemptResult) ──► intake (mpsc, cap = workers)
//! worker N ──┘                              │
//!                                           ▼
//!                                     collector task ──► Mutex<Vec<_>>
//! ```
//!
//! ## Rules
//! - The list is append-only while the run is in flight; [`Aggregator::snapshot`]
//!   copies it and never hands out a live reference.
//! - The collector exits when the intake channel is closed, which happens
//!   only after every worker has dropped its sender — so no result can
//!   arrive after the collector is gone.
//! - Counter reads during the run may be stale; they are stable once
//!   `stop()` has joined the collector.

use std::sync::atomic::AtomicU32;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::report::AttemptResult;

/// Run-wide attempt accounting, incremented lock-free by all workers.
#[derive(Default)]
pub(crate) struct RunCounters {
    /// Total attempts executed.
    pub attempts: AtomicU32,
    /// Attempts that ended in failure.
    pub failed: AtomicU32,
}

/// Concurrency-safe sink for attempt results.
pub(crate) struct Aggregator {
    results: Arc<Mutex<Vec<AttemptResult>>>,
}

impl Aggregator {
    pub(crate) fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Spawns the collector task draining `intake` into the result list.
    ///
    /// The returned handle completes once the channel is closed and fully
    /// drained.
    pub(crate) fn collect(&self, mut intake: mpsc::Receiver<AttemptResult>) -> JoinHandle<()> {
        let results = Arc::clone(&self.results);
        tokio::spawn(async move {
            while let Some(result) = intake.recv().await {
                results.lock().push(result);
            }
        })
    }

    /// Copies the current result list.
    pub(crate) fn snapshot(&self) -> Vec<AttemptResult> {
        self.results.lock().clone()
    }
}
