//! # Worker: queue pull loop and per-task retry sequence.
//!
//! Each worker pulls one task handle at a time from the shared pending
//! queue, runs that task's full retry sequence to completion, then pulls the
//! next. Shutdown is cooperative: a worker exits when the queue reports
//! closed-and-empty, no side-channel signal is involved.
//!
//! ## Retry loop (per task, terminal on first success or exhausted budget)
//! ```text
//! for attempt in 0..budget {
//!   ├─► emit "running task-<name> attempt <attempt+1>"
//!   ├─► invoke work function, capture outcome
//!   ├─► on failure: failed += 1, emit "failed ..."
//!   ├─► emit "finished ...", attempts += 1
//!   ├─► send AttemptResult into the intake channel
//!   │     (bounded; may briefly block the worker under backpressure)
//!   └─► break on success
//! }
//! ```
//!
//! ## Rules
//! - Attempts for one task are strictly sequential and ordered by index.
//! - Retries are immediate; there is no backoff between attempts.
//! - Failures are absorbed into the accounting, never propagated.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};

use crate::core::RunCounters;
use crate::report::AttemptResult;
use crate::tasks::TaskHandle;

/// One executor of the fixed-size pool.
pub(crate) struct Worker {
    index: usize,
    queue: Arc<Mutex<mpsc::Receiver<TaskHandle>>>,
    intake: mpsc::Sender<AttemptResult>,
    counters: Arc<RunCounters>,
}

impl Worker {
    pub(crate) fn new(
        index: usize,
        queue: Arc<Mutex<mpsc::Receiver<TaskHandle>>>,
        intake: mpsc::Sender<AttemptResult>,
        counters: Arc<RunCounters>,
    ) -> Self {
        Self {
            index,
            queue,
            intake,
            counters,
        }
    }

    /// Runs the pull loop until the pending queue is closed and drained.
    ///
    /// The receiver lock is held only while waiting for the next handle, so
    /// a worker busy with a retry sequence never blocks its peers from
    /// pulling.
    pub(crate) async fn run(self) {
        loop {
            let task = { self.queue.lock().await.recv().await };
            let Some(task) = task else { break };
            task.emit(&format!(
                "running task: {} with worker: {}",
                task.name(),
                self.index
            ));
            self.run_attempts(&task).await;
        }
    }

    /// Runs one task's retry sequence: up to `retry_budget` attempts,
    /// stopping early on the first success.
    async fn run_attempts(&self, task: &TaskHandle) {
        for attempt in 0..task.retry_budget() {
            task.emit(&format!(
                "running task-{} attempt {}",
                task.name(),
                attempt + 1
            ));

            let ok = task.invoke().await.is_ok();
            if !ok {
                self.counters.failed.fetch_add(1, Ordering::Relaxed);
                task.emit(&format!(
                    "failed task-{} attempt {}",
                    task.name(),
                    attempt + 1
                ));
            }
            task.emit(&format!(
                "finished task-{} attempt {}",
                task.name(),
                attempt + 1
            ));
            self.counters.attempts.fetch_add(1, Ordering::Relaxed);

            let result = AttemptResult::new(task.clone(), attempt, ok);
            if self.intake.send(result).await.is_err() {
                // Collector is gone; nothing left to record into.
                break;
            }
            if ok {
                break;
            }
        }
    }
}
