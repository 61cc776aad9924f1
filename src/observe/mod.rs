//! # Observability sinks for task lifecycle lines.
//!
//! This module provides the extension point for per-task logging:
//! - [`Sink`] - trait receiving one formatted line per lifecycle event
//! - [`NoopSink`] - default sink that discards everything
//! - [`SinkRef`] - shared reference to a sink (`Arc<dyn Sink>`)
//! - [`LogWriter`] - built-in sink forwarding to the `log` facade
//!   (feature = "logging")

mod sink;

pub use sink::{NoopSink, Sink, SinkRef};

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use self::log::LogWriter;
