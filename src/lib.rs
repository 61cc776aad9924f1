//! # taskpool
//!
//! **Taskpool** is a bounded-concurrency task executor for Rust.
//!
//! Callers register independently-failable units of work, the executor runs
//! them across a fixed-size worker pool, retries failed tasks up to a
//! per-task budget, and aggregates per-attempt results into a final report.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐
//!  │  register()  │  │  register()  │  │  register()  │
//!  │ (work + opts)│  │ (work + opts)│  │ (work + opts)│
//!  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘
//!         ▼                 ▼                 ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  Scheduler (lifecycle: accepting → running → stopped)   │
//! │  - pending queue (bounded, non-blocking enqueue)        │
//! │  - run counters (atomic attempts / failures)            │
//! │  - aggregator (ordered attempt results)                 │
//! └──────┬───────────────┬───────────────┬──────────────────┘
//!        ▼               ▼               ▼
//!  ┌───────────┐   ┌───────────┐   ┌───────────┐
//!  │  Worker 0 │   │  Worker 1 │   │  Worker N │
//!  │(retry loop│   │ per task) │   │           │
//!  └─────┬─────┘   └─────┬─────┘   └─────┬─────┘
//!        │ AttemptResult │               │
//!        ▼               ▼               ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │          intake channel (capacity = worker count)       │
//! └────────────────────────────┬────────────────────────────┘
//!                              ▼
//!                    collector ──► result list ──► Summary
//! ```
//!
//! ### Lifecycle
//! ```text
//! new(queue_capacity, worker_count) ──► Accepting
//!
//! Accepting:
//!   ├─► register(work, opts)  non-blocking; QueueFull when no slot
//!   └─► run()                 closes intake, spawns workers + collector
//!
//! Running:
//!   ├─► workers pull from the queue, run each task's retry sequence
//!   │     (terminal on first success or exhausted budget; no backoff)
//!   └─► stop().await          closes the queue, joins workers, then
//!                             joins the collector after the drain
//!
//! Stopped:
//!   └─► summary()             registered / attempts / failed / succeeded
//!                             plus the per-attempt table
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types / traits            |
//! |-------------------|----------------------------------------------------------|-------------------------------|
//! | **Tasks**         | Define work as async functions or trait impls.           | [`Work`], [`WorkFn`], [`WorkRef`] |
//! | **Registration**  | Per-task name, retry budget, and sink, applied in order. | [`TaskOptions`], [`TaskHandle`] |
//! | **Execution**     | Fixed worker pool with immediate, budgeted retries.      | [`Scheduler`], [`SchedulerConfig`] |
//! | **Observability** | Optional per-task lifecycle lines.                       | [`Sink`], [`NoopSink`]        |
//! | **Reporting**     | Settled counters and a bordered per-attempt table.       | [`Summary`], [`AttemptResult`] |
//! | **Errors**        | Typed construction/registration errors; task failures.   | [`SchedulerError`], [`TaskError`] |
//!
//! ## Optional features
//! - `logging`: exports [`LogWriter`], a sink forwarding to the `log` facade.
//!
//! ## Example
//! ```rust
//! use taskpool::{Scheduler, TaskError, TaskOptions, WorkFn};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scheduler = Scheduler::new(40, 4)?;
//!
//!     scheduler.register(
//!         WorkFn::arc(|| async { Ok::<_, TaskError>(()) }),
//!         TaskOptions::new().name("steady"),
//!     )?;
//!     scheduler.register(
//!         WorkFn::arc(|| async { Err(TaskError::fail("error")) }),
//!         TaskOptions::new().name("doomed").retries(4),
//!     )?;
//!
//!     scheduler.run();
//!     scheduler.stop().await;
//!
//!     let summary = scheduler.summary();
//!     assert_eq!(summary.attempts, 5);
//!     assert_eq!(summary.failed, 4);
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```

mod core;
mod error;
mod observe;
mod report;
mod tasks;

// ---- Public re-exports ----

pub use crate::core::{Scheduler, SchedulerConfig};
pub use error::{SchedulerError, TaskError};
pub use observe::{NoopSink, Sink, SinkRef};
pub use report::{AttemptResult, Summary};
pub use tasks::{TaskHandle, TaskOptions, Work, WorkFn, WorkRef};

// Optional: expose the built-in `log`-facade sink.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observe::LogWriter;
