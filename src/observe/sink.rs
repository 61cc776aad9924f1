//! # Event sink trait.
//!
//! Provides [`Sink`], an injectable logging capability attached to a task at
//! registration time. The scheduler core only calls into it; storage and
//! formatting of the lines is the sink's concern.
//!
//! ## Lines emitted per task (in order)
//! ```text
//! registered
//! running task: <name> with worker: <worker-index>
//! running task-<name> attempt <n>
//! failed task-<name> attempt <n>        (failed attempts only)
//! finished task-<name> attempt <n>
//! ```
//!
//! ## Rules
//! - A sink is shared by reference ([`SinkRef`]) and never mutated by the
//!   task handle that holds it.
//! - The default is [`NoopSink`], so the retry loop never null-checks.
//! - `emit` is called inline from worker tasks; implementations should
//!   return quickly and must not panic.

use std::sync::Arc;

/// Receiver of formatted task lifecycle lines.
///
/// Implement this to route the scheduler's per-task events into your own
/// logging or capture infrastructure.
///
/// # Example
/// ```
/// use taskpool::Sink;
///
/// struct Stdout;
///
/// impl Sink for Stdout {
///     fn emit(&self, line: &str) {
///         println!("{line}");
///     }
/// }
/// ```
pub trait Sink: Send + Sync + 'static {
    /// Consumes a single formatted event line.
    fn emit(&self, line: &str);
}

/// Shared handle to a sink.
pub type SinkRef = Arc<dyn Sink>;

/// Sink that discards every line.
///
/// Attached to any task registered without an explicit sink.
#[derive(Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    fn emit(&self, _line: &str) {}
}
