//! # Scheduler core: lifecycle, worker pool, and result aggregation.

mod aggregator;
mod config;
mod scheduler;
mod worker;

pub use config::SchedulerConfig;
pub use scheduler::Scheduler;

pub(crate) use aggregator::{Aggregator, RunCounters};
pub(crate) use worker::Worker;
