//! # Registered task handle.
//!
//! A [`TaskHandle`] wraps a caller-supplied unit of work with everything the
//! worker pool needs to run it: a unique identity, a display name, a retry
//! budget, and an observability sink.
//!
//! ## Rules
//! - Handles are minted by the scheduler at registration and immutable
//!   afterwards; workers only read them.
//! - Cloning is cheap (the work function and sink are shared by `Arc`), and
//!   attempt results carry a clone rather than a live reference.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::TaskError;
use crate::observe::{NoopSink, SinkRef};
use crate::tasks::{TaskOptions, WorkRef};

/// A registered task: identity, display name, work function, retry budget,
/// and sink.
#[derive(Clone)]
pub struct TaskHandle {
    id: Uuid,
    name: Arc<str>,
    work: WorkRef,
    budget: u32,
    sink: SinkRef,
}

impl TaskHandle {
    /// Mints a handle from a unit of work and registration options.
    ///
    /// Defaults: name `task-<id>`, retry budget 1, no-op sink. Options are
    /// already normalized by [`TaskOptions`] (the retry floor clamp happens
    /// in its setter).
    pub(crate) fn new(work: WorkRef, opts: TaskOptions) -> Self {
        let id = Uuid::new_v4();
        let name = opts.name.unwrap_or_else(|| format!("task-{id}"));
        Self {
            id,
            name: name.into(),
            work,
            budget: opts.retries.unwrap_or(1),
            sink: opts.sink.unwrap_or_else(|| Arc::new(NoopSink)),
        }
    }

    /// Returns the globally unique identifier assigned at registration.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the display name used in reports and sink lines.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the maximum number of attempts for this task.
    pub fn retry_budget(&self) -> u32 {
        self.budget
    }

    /// Runs one attempt of the work function.
    pub(crate) async fn invoke(&self) -> Result<(), TaskError> {
        self.work.run().await
    }

    /// Emits a lifecycle line to the attached sink.
    pub(crate) fn emit(&self, line: &str) {
        self.sink.emit(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::WorkFn;

    #[test]
    fn test_defaults_from_empty_options() {
        let work: WorkRef = WorkFn::arc(|| async { Ok::<(), TaskError>(()) });
        let handle = TaskHandle::new(work, TaskOptions::new());
        assert_eq!(handle.retry_budget(), 1);
        assert_eq!(handle.name(), format!("task-{}", handle.id()));
    }

    #[test]
    fn test_options_override_defaults() {
        let work: WorkRef = WorkFn::arc(|| async { Ok::<(), TaskError>(()) });
        let handle = TaskHandle::new(work, TaskOptions::new().name("importer").retries(4));
        assert_eq!(handle.name(), "importer");
        assert_eq!(handle.retry_budget(), 4);
    }

    #[test]
    fn test_handles_get_distinct_ids() {
        let a = TaskHandle::new(WorkFn::arc(|| async { Ok::<(), TaskError>(()) }), TaskOptions::new());
        let b = TaskHandle::new(WorkFn::arc(|| async { Ok::<(), TaskError>(()) }), TaskOptions::new());
        assert_ne!(a.id(), b.id());
    }
}
