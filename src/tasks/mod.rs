//! # Task abstractions and registration-time configuration.
//!
//! This module provides the task-facing types:
//! - [`Work`] - trait for implementing a fallible unit of work
//! - [`WorkFn`] - function-backed work implementation
//! - [`WorkRef`] - shared reference to a unit of work (`Arc<dyn Work>`)
//! - [`TaskHandle`] - registered task: identity, name, retry budget, sink
//! - [`TaskOptions`] - builder applied to a handle at registration

mod handle;
mod options;
mod work;

pub use handle::TaskHandle;
pub use options::TaskOptions;
pub use work::{Work, WorkFn, WorkRef};
