//! # LogWriter — sink backed by the `log` facade
//!
//! A minimal [`Sink`] that forwards each lifecycle line to `log::info!`.
//! Use it for demos or whenever a `log`-compatible logger is already wired
//! into the process.
//!
//! ## Example output
//! ```text
//! [INFO taskpool] registered
//! [INFO taskpool] running task: number1 with worker: 2
//! [INFO taskpool] running task-number1 attempt 1
//! [INFO taskpool] finished task-number1 attempt 1
//! ```

use crate::observe::Sink;

/// Sink that writes every line at `info` level.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Constructs a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Sink for LogWriter {
    fn emit(&self, line: &str) {
        log::info!("{line}");
    }
}
