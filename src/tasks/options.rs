//! # Registration-time task configuration.
//!
//! [`TaskOptions`] is a builder applied to a freshly minted task handle by
//! [`Scheduler::register`](crate::Scheduler::register). Setters apply in
//! call order with last-write-wins semantics; anything left unset falls back
//! to the handle's defaults (generated name, retry budget 1, no-op sink).

use crate::observe::SinkRef;

/// Configuration applied to a task at registration.
///
/// ## Example
/// ```
/// use std::sync::Arc;
/// use taskpool::{NoopSink, TaskOptions};
///
/// let opts = TaskOptions::new()
///     .name("importer")
///     .retries(4)
///     .sink(Arc::new(NoopSink));
/// ```
#[derive(Clone, Default)]
pub struct TaskOptions {
    pub(crate) name: Option<String>,
    pub(crate) retries: Option<u32>,
    pub(crate) sink: Option<SinkRef>,
}

impl TaskOptions {
    /// Creates an empty option set (all defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name used in reports and sink lines.
    ///
    /// The name is never used for lookup or equality.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the retry budget: the maximum number of attempts, not
    /// retries-in-addition-to-the-first.
    ///
    /// A value below 1 is clamped to 1 so the task always gets at least one
    /// attempt; there is no error path for it.
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries.max(1));
        self
    }

    /// Attaches an observability sink receiving the task's lifecycle lines.
    pub fn sink(mut self, sink: SinkRef) -> Self {
        self.sink = Some(sink);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retries_clamped_to_minimum_one() {
        let opts = TaskOptions::new().retries(0);
        assert_eq!(opts.retries, Some(1));
    }

    #[test]
    fn test_last_write_wins() {
        let opts = TaskOptions::new().name("first").retries(3).name("second");
        assert_eq!(opts.name.as_deref(), Some("second"));
        assert_eq!(opts.retries, Some(3));
    }

    #[test]
    fn test_defaults_are_unset() {
        let opts = TaskOptions::new();
        assert!(opts.name.is_none());
        assert!(opts.retries.is_none());
        assert!(opts.sink.is_none());
    }
}
