//! # Scheduler construction parameters.
//!
//! [`SchedulerConfig`] holds the two fixed sizes of a scheduler instance:
//! the pending-queue capacity and the worker-pool size. Both are immutable
//! after construction; validation reports every violated constraint jointly
//! instead of stopping at the first.

use crate::error::SchedulerError;

/// Construction parameters for a [`Scheduler`](crate::Scheduler).
///
/// ## Field semantics
/// - `queue_capacity`: bounded size of the pending-task queue; registration
///   fails fast once it is full.
/// - `worker_count`: fixed number of concurrent workers draining the queue;
///   also the capacity of the result intake channel, which bounds the
///   backpressure a burst of results can exert on workers.
#[derive(Clone, Copy, Debug)]
pub struct SchedulerConfig {
    /// Capacity of the bounded pending-task queue.
    pub queue_capacity: usize,
    /// Number of workers in the pool.
    pub worker_count: usize,
}

impl SchedulerConfig {
    /// Creates a config from the two sizes. Call [`validate`](Self::validate)
    /// before use; `Scheduler::new` does this for you.
    pub fn new(queue_capacity: usize, worker_count: usize) -> Self {
        Self {
            queue_capacity,
            worker_count,
        }
    }

    /// Checks that both sizes are positive.
    ///
    /// Violations are collected into a single
    /// [`SchedulerError::InvalidConfig`] listing every broken constraint.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        let mut violations = Vec::new();
        if self.queue_capacity == 0 {
            violations.push("queue capacity must be greater than 0".to_string());
        }
        if self.worker_count == 0 {
            violations.push("worker count must be greater than 0".to_string());
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchedulerError::InvalidConfig { violations })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_passes() {
        assert!(SchedulerConfig::new(1, 1).validate().is_ok());
        assert!(SchedulerConfig::new(40, 4).validate().is_ok());
    }

    #[test]
    fn test_zero_queue_capacity_rejected() {
        let err = SchedulerConfig::new(0, 2).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid scheduler configuration: queue capacity must be greater than 0"
        );
    }

    #[test]
    fn test_zero_worker_count_rejected() {
        let err = SchedulerConfig::new(4, 0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid scheduler configuration: worker count must be greater than 0"
        );
    }

    #[test]
    fn test_violations_reported_jointly() {
        let err = SchedulerConfig::new(0, 0).validate().unwrap_err();
        let SchedulerError::InvalidConfig { violations } = err else {
            panic!("expected InvalidConfig");
        };
        assert_eq!(violations.len(), 2);
    }
}
