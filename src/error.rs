//! Error types used by the scheduler and by task work functions.
//!
//! This module defines two main error enums:
//!
//! - [`SchedulerError`] — errors surfaced by the scheduler API itself
//!   (construction and registration).
//! - [`TaskError`] — the failure signal a work function returns for one
//!   attempt.
//!
//! Task failures are ordinary per-attempt data: the retry loop absorbs them
//! and records them in the run report, they are never propagated as a
//! scheduler-level error. Lifecycle misuse (`run()` twice, `stop()` before
//! `run()`) is a contract violation and panics instead of returning a value
//! of either type.

use thiserror::Error;

/// # Errors surfaced by the scheduler API.
///
/// All variants are recoverable from the caller's point of view: a failed
/// construction builds nothing, and a failed registration leaves the
/// scheduler untouched.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SchedulerError {
    /// One or more construction parameters were invalid.
    ///
    /// Violations are collected jointly, not short-circuited on the first,
    /// so the message lists every broken constraint.
    #[error("invalid scheduler configuration: {}", violations.join("; "))]
    InvalidConfig {
        /// Human-readable description of each violated constraint.
        violations: Vec<String>,
    },

    /// `register` was called while the scheduler is no longer accepting
    /// (after `run()` or `stop()`).
    #[error("scheduler is stopped")]
    Stopped,

    /// The bounded pending queue had no free slot at the instant of the
    /// call. Registration never blocks waiting for space.
    #[error("pending queue is full")]
    QueueFull,
}

impl SchedulerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use taskpool::SchedulerError;
    ///
    /// assert_eq!(SchedulerError::QueueFull.as_label(), "queue_full");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SchedulerError::InvalidConfig { .. } => "invalid_config",
            SchedulerError::Stopped => "scheduler_stopped",
            SchedulerError::QueueFull => "queue_full",
        }
    }
}

/// # Failure signal returned by a work function.
///
/// A `TaskError` marks one attempt as failed. It never aborts the worker or
/// other tasks; the retry loop records it and either retries or gives up
/// once the task's retry budget is exhausted.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TaskError {
    /// The attempt failed; the task may succeed if retried.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl TaskError {
    /// Creates a [`TaskError::Fail`] from any message.
    ///
    /// # Example
    /// ```
    /// use taskpool::TaskError;
    ///
    /// let err = TaskError::fail("connection refused");
    /// assert_eq!(err.to_string(), "execution failed: connection refused");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        TaskError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Fail { .. } => "task_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    ///
    /// # Example
    /// ```
    /// use taskpool::TaskError;
    ///
    /// let err = TaskError::fail("connection refused");
    /// assert_eq!(err.as_message(), "error: connection refused");
    /// ```
    pub fn as_message(&self) -> String {
        match self {
            TaskError::Fail { error } => format!("error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_joins_all_violations() {
        let err = SchedulerError::InvalidConfig {
            violations: vec!["a must hold".to_string(), "b must hold".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "invalid scheduler configuration: a must hold; b must hold"
        );
    }

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(SchedulerError::Stopped.as_label(), "scheduler_stopped");
        assert_eq!(TaskError::fail("boom").as_label(), "task_failed");
    }

    #[test]
    fn test_task_error_message_carries_detail() {
        assert_eq!(TaskError::fail("boom").as_message(), "error: boom");
    }
}
