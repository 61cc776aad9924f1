//! # Scheduler: lifecycle state machine and orchestration.
//!
//! The [`Scheduler`] owns the bounded pending queue, the worker pool, the
//! result aggregator, and the lifecycle state. Callers drive it through
//! four operations: `register`, `run`, `stop`, `summary`.
//!
//! ## High-level architecture
//! ```text
//! register(work, opts) ── try_send ──► pending queue (mpsc, cap = queue_capacity)
//!                                          │
//!                          run():          ▼
//!                            worker 0 ... worker N-1   (shared receiver)
//!                                │ retry loop per task
//!                                ▼
//!                          intake channel (cap = worker_count)
//!                                │
//!                                ▼
//!                          collector ──► aggregator list + run counters
//!
//! stop(): close pending queue ─► join workers ─► intake drains ─► join collector
//! ```
//!
//! ## Lifecycle
//! ```text
//! Accepting ──run()──► Running ──stop().await──► Stopped
//!
//! - register() succeeds only while Accepting; afterwards it fails with
//!   SchedulerError::Stopped even when the queue has free slots.
//! - run() twice, stop() before run(), stop() twice: contract violations,
//!   the scheduler panics instead of returning an error.
//! - summary() is callable at any time; values are stable once stop()
//!   has returned.
//! ```
//!
//! ## Example
//! ```rust
//! use taskpool::{Scheduler, TaskError, TaskOptions, WorkFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scheduler = Scheduler::new(8, 2)?;
//!
//!     scheduler.register(
//!         WorkFn::arc(|| async { Ok::<_, TaskError>(()) }),
//!         TaskOptions::new().name("greeter"),
//!     )?;
//!
//!     scheduler.run();
//!     scheduler.stop().await;
//!
//!     let summary = scheduler.summary();
//!     assert_eq!(summary.attempts, 1);
//!     assert_eq!(summary.failed, 0);
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

use crate::core::{Aggregator, RunCounters, SchedulerConfig, Worker};
use crate::error::SchedulerError;
use crate::report::{AttemptResult, Summary};
use crate::tasks::{TaskHandle, TaskOptions, WorkRef};

/// Lifecycle of a scheduler instance.
///
/// Holds the run-dependent resources: the pending receiver before `run()`,
/// the worker/collector handles between `run()` and `stop()`.
enum Lifecycle {
    Accepting {
        pending_rx: mpsc::Receiver<TaskHandle>,
    },
    Running {
        workers: JoinSet<()>,
        collector: JoinHandle<()>,
    },
    Stopped,
}

/// Bounded-concurrency task executor.
///
/// Tasks are registered while the scheduler is accepting, executed across a
/// fixed-size worker pool once [`run`](Scheduler::run) is called, and
/// accounted per attempt. Each instance is fully independent; several may
/// run in parallel within one process.
pub struct Scheduler {
    cfg: SchedulerConfig,
    /// Cleared by `run()`; checked first by `register()`.
    accepting: AtomicBool,
    /// Tasks enqueued so far; final once `accepting` is cleared.
    registered: AtomicUsize,
    /// Send side of the pending queue. Taken (closed) by `stop()`.
    pending_tx: Mutex<Option<mpsc::Sender<TaskHandle>>>,
    counters: Arc<RunCounters>,
    aggregator: Aggregator,
    state: Mutex<Lifecycle>,
}

impl Scheduler {
    /// Creates a scheduler with the given pending-queue capacity and worker
    /// count.
    ///
    /// Fails with [`SchedulerError::InvalidConfig`] when either size is
    /// zero; both violations are reported jointly. On success the scheduler
    /// is accepting, with an empty queue and zeroed counters.
    pub fn new(queue_capacity: usize, worker_count: usize) -> Result<Self, SchedulerError> {
        Self::with_config(SchedulerConfig::new(queue_capacity, worker_count))
    }

    /// Creates a scheduler from a prebuilt [`SchedulerConfig`].
    pub fn with_config(cfg: SchedulerConfig) -> Result<Self, SchedulerError> {
        cfg.validate()?;
        let (pending_tx, pending_rx) = mpsc::channel(cfg.queue_capacity);
        Ok(Self {
            cfg,
            accepting: AtomicBool::new(true),
            registered: AtomicUsize::new(0),
            pending_tx: Mutex::new(Some(pending_tx)),
            counters: Arc::new(RunCounters::default()),
            aggregator: Aggregator::new(),
            state: Mutex::new(Lifecycle::Accepting { pending_rx }),
        })
    }

    /// Registers a unit of work for execution.
    ///
    /// Mints a fresh [`TaskHandle`], applies `opts` to it, and attempts a
    /// non-blocking enqueue. Never blocks the caller.
    ///
    /// ## Errors
    /// - [`SchedulerError::Stopped`] when the scheduler is no longer
    ///   accepting (after `run()` or `stop()`).
    /// - [`SchedulerError::QueueFull`] when the bounded queue has no free
    ///   slot at the instant of the call.
    pub fn register(&self, work: WorkRef, opts: TaskOptions) -> Result<(), SchedulerError> {
        if !self.accepting.load(Ordering::Acquire) {
            return Err(SchedulerError::Stopped);
        }
        let Some(tx) = self.pending_tx.lock().clone() else {
            return Err(SchedulerError::Stopped);
        };

        let handle = TaskHandle::new(work, opts);
        match tx.try_send(handle.clone()) {
            Ok(()) => {
                self.registered.fetch_add(1, Ordering::Release);
                handle.emit("registered");
                Ok(())
            }
            Err(mpsc::error::TrySendError::Full(_)) => Err(SchedulerError::QueueFull),
            Err(mpsc::error::TrySendError::Closed(_)) => Err(SchedulerError::Stopped),
        }
    }

    /// Closes registration and launches the worker pool and the collector.
    ///
    /// Returns immediately; execution proceeds concurrently with the
    /// caller. The registered count is settled here, before any worker
    /// starts, because registration is structurally forbidden from now on.
    ///
    /// ## Panics
    /// Calling `run()` more than once is a lifecycle contract violation and
    /// panics. Must be called from within a tokio runtime.
    pub fn run(&self) {
        self.accepting.store(false, Ordering::Release);

        let mut state = self.state.lock();
        let pending_rx = match std::mem::replace(&mut *state, Lifecycle::Stopped) {
            Lifecycle::Accepting { pending_rx } => pending_rx,
            other => {
                *state = other;
                panic!("Scheduler::run() may be called at most once");
            }
        };

        let (intake_tx, intake_rx) = mpsc::channel::<AttemptResult>(self.cfg.worker_count);
        let collector = self.aggregator.collect(intake_rx);

        let queue = Arc::new(tokio::sync::Mutex::new(pending_rx));
        let mut workers = JoinSet::new();
        for index in 0..self.cfg.worker_count {
            let worker = Worker::new(
                index,
                Arc::clone(&queue),
                intake_tx.clone(),
                Arc::clone(&self.counters),
            );
            workers.spawn(worker.run());
        }
        // The workers hold the only remaining intake senders: once they all
        // exit, the collector drains and completes.
        drop(intake_tx);

        *state = Lifecycle::Running { workers, collector };
    }

    /// Closes the pending queue and waits for the full drain.
    ///
    /// Blocks until every worker has exited (queue closed and empty) and
    /// every buffered attempt result has been collected. In-flight attempts
    /// are never aborted, only awaited.
    ///
    /// ## Panics
    /// Calling `stop()` before `run()`, or twice, is a lifecycle contract
    /// violation and panics.
    pub async fn stop(&self) {
        let (mut workers, collector) = {
            let mut state = self.state.lock();
            match std::mem::replace(&mut *state, Lifecycle::Stopped) {
                Lifecycle::Running { workers, collector } => (workers, collector),
                Lifecycle::Accepting { .. } => {
                    panic!("Scheduler::stop() called before run()");
                }
                Lifecycle::Stopped => {
                    panic!("Scheduler::stop() may be called at most once");
                }
            }
        };

        // Dropping the sender closes the queue; workers drain what is left
        // and exit on their own.
        self.pending_tx.lock().take();

        while workers.join_next().await.is_some() {}
        let _ = collector.await;
    }

    /// Returns a read-only snapshot of the run.
    ///
    /// Pure function of already-settled state after `stop()`; callable any
    /// number of times. Reads during the run may be stale or partial by
    /// design.
    pub fn summary(&self) -> Summary {
        Summary {
            registered: self.registered.load(Ordering::Acquire),
            attempts: self.counters.attempts.load(Ordering::Acquire),
            failed: self.counters.failed.load(Ordering::Acquire),
            results: self.aggregator.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::observe::Sink;
    use crate::tasks::WorkFn;

    fn succeeding() -> WorkRef {
        WorkFn::arc(|| async { Ok::<(), TaskError>(()) })
    }

    fn failing() -> WorkRef {
        WorkFn::arc(|| async { Err(TaskError::fail("error")) })
    }

    struct CaptureSink(Mutex<Vec<String>>);

    impl CaptureSink {
        fn new() -> Arc<Self> {
            Arc::new(Self(Mutex::new(Vec::new())))
        }

        fn lines(&self) -> Vec<String> {
            self.0.lock().clone()
        }
    }

    impl Sink for CaptureSink {
        fn emit(&self, line: &str) {
            self.0.lock().push(line.to_string());
        }
    }

    #[test]
    fn test_new_rejects_invalid_sizes_jointly() {
        assert!(Scheduler::new(4, 2).is_ok());
        for (cap, workers, expected_violations) in [(0, 2, 1), (4, 0, 1), (0, 0, 2)] {
            let Err(err) = Scheduler::new(cap, workers) else {
                panic!("expected construction to fail");
            };
            let SchedulerError::InvalidConfig { violations } = err else {
                panic!("expected InvalidConfig");
            };
            assert_eq!(violations.len(), expected_violations);
        }
    }

    #[tokio::test]
    async fn test_registration_fails_fast_when_queue_is_full() {
        let scheduler = Scheduler::new(2, 1).unwrap();
        scheduler.register(succeeding(), TaskOptions::new()).unwrap();
        scheduler.register(succeeding(), TaskOptions::new()).unwrap();

        let err = scheduler.register(succeeding(), TaskOptions::new()).unwrap_err();
        assert!(matches!(err, SchedulerError::QueueFull));

        scheduler.run();
        scheduler.stop().await;
        assert_eq!(scheduler.summary().registered, 2);
    }

    #[tokio::test]
    async fn test_register_after_run_fails_stopped_with_free_slots() {
        let scheduler = Scheduler::new(10, 1).unwrap();
        scheduler.register(succeeding(), TaskOptions::new()).unwrap();
        scheduler.run();

        let err = scheduler.register(succeeding(), TaskOptions::new()).unwrap_err();
        assert!(matches!(err, SchedulerError::Stopped));

        scheduler.stop().await;
        let err = scheduler.register(succeeding(), TaskOptions::new()).unwrap_err();
        assert!(matches!(err, SchedulerError::Stopped));
    }

    #[tokio::test]
    async fn test_registered_count_settles_at_run() {
        let scheduler = Scheduler::new(10, 2).unwrap();
        for _ in 0..3 {
            scheduler.register(succeeding(), TaskOptions::new()).unwrap();
        }
        scheduler.run();
        // Readable before the drain finishes; settled because registration
        // is structurally closed.
        assert_eq!(scheduler.summary().registered, 3);
        scheduler.stop().await;
        assert_eq!(scheduler.summary().registered, 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_mixed_run_accounts_every_attempt() {
        // Three always-succeeding tasks (budget 1) plus one always-failing
        // task with budget 4: 3 + 4 = 7 attempts, 4 failed.
        let scheduler = Scheduler::new(4, 2).unwrap();
        for name in ["number1", "number2", "number3"] {
            scheduler
                .register(succeeding(), TaskOptions::new().name(name))
                .unwrap();
        }
        scheduler
            .register(failing(), TaskOptions::new().name("number4").retries(4))
            .unwrap();

        scheduler.run();
        scheduler.stop().await;

        let summary = scheduler.summary();
        assert_eq!(summary.registered, 4);
        assert_eq!(summary.attempts, 7);
        assert_eq!(summary.failed, 4);
        assert_eq!(summary.succeeded(), 3);
        assert_eq!(summary.results.len(), 7);
        assert_eq!(summary.results.iter().filter(|r| r.is_ok()).count(), 3);

        let failing_attempts: Vec<u32> = summary
            .results
            .iter()
            .filter(|r| r.task().name() == "number4")
            .map(|r| r.attempt())
            .collect();
        assert_eq!(failing_attempts, vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_empty_run_produces_zero_row_summary() {
        let scheduler = Scheduler::new(10, 2).unwrap();
        scheduler.run();
        scheduler.stop().await;

        let summary = scheduler.summary();
        assert_eq!(summary.registered, 0);
        assert_eq!(summary.attempts, 0);
        assert_eq!(summary.failed, 0);
        assert!(summary.results.is_empty());
        assert!(summary.to_string().contains("Per-Task Results"));
    }

    #[tokio::test]
    async fn test_counters_are_stable_after_stop() {
        let scheduler = Scheduler::new(4, 2).unwrap();
        scheduler
            .register(failing(), TaskOptions::new().retries(3))
            .unwrap();
        scheduler.run();
        scheduler.stop().await;

        let first = scheduler.summary();
        let second = scheduler.summary();
        assert_eq!(first.attempts, 3);
        assert_eq!(first.attempts, second.attempts);
        assert_eq!(first.failed, second.failed);
        assert_eq!(first.results.len(), second.results.len());
    }

    #[tokio::test]
    async fn test_sink_receives_lifecycle_lines_in_order() {
        let sink = CaptureSink::new();
        let scheduler = Scheduler::new(4, 1).unwrap();
        scheduler
            .register(
                failing(),
                TaskOptions::new().name("t").retries(2).sink(sink.clone()),
            )
            .unwrap();
        scheduler.run();
        scheduler.stop().await;

        assert_eq!(
            sink.lines(),
            vec![
                "registered",
                "running task: t with worker: 0",
                "running task-t attempt 1",
                "failed task-t attempt 1",
                "finished task-t attempt 1",
                "running task-t attempt 2",
                "failed task-t attempt 2",
                "finished task-t attempt 2",
            ]
        );
    }

    #[tokio::test]
    #[should_panic(expected = "run() may be called at most once")]
    async fn test_run_twice_is_a_contract_violation() {
        let scheduler = Scheduler::new(4, 1).unwrap();
        scheduler.run();
        scheduler.run();
    }

    #[tokio::test]
    #[should_panic(expected = "stop() called before run()")]
    async fn test_stop_before_run_is_a_contract_violation() {
        let scheduler = Scheduler::new(4, 1).unwrap();
        scheduler.stop().await;
    }

    #[tokio::test]
    #[should_panic(expected = "stop() may be called at most once")]
    async fn test_stop_twice_is_a_contract_violation() {
        let scheduler = Scheduler::new(4, 1).unwrap();
        scheduler.run();
        scheduler.stop().await;
        scheduler.stop().await;
    }
}
