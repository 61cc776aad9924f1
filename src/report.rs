//! # Attempt results and the execution summary.
//!
//! [`AttemptResult`] is the immutable record of one execution attempt;
//! [`Summary`] is the read contract over the scheduler's settled state:
//! the run counters plus a snapshot of every recorded attempt.
//!
//! `Summary` also renders the human-readable report through [`Display`]:
//! a fixed-width bordered table with the four run statistics followed by one
//! row per attempt. Rendering is pure presentation; it reads nothing beyond
//! the fields the summary already carries.
//!
//! ## Example output
//! ```text
//! ╔════════════════════════════════════════╗
//! ║       Scheduler Execution Report       ║
//! ╠════════════════════════════════════════╣
//! ║ Registered tasks        :     4        ║
//! ║ Total executions        :     7        ║
//! ║ Successful executions   :     3        ║
//! ║ Failed executions       :     4        ║
//! ╠════════════════════════════════════════╣
//! ║            Per-Task Results            ║
//! ╠════════════════════════════════════════╣
//! ║ number1 rep:  0 ➜ OK                   ║
//! ║ number4 rep:  0 ➜ ERR                  ║
//! ╚════════════════════════════════════════╝
//! ```

use std::fmt;

use crate::tasks::TaskHandle;

/// Columns reserved per row for everything after the task name
/// (` rep:000 ➜ ERR` plus the row padding).
const FIXED_SUFFIX_WIDTH: usize = 16;

/// Minimum inner width of the report table.
const MIN_INNER_WIDTH: usize = 40;

/// Immutable record of one execution attempt.
///
/// Carries a clone of the task handle (never a live reference), the
/// zero-based attempt index within the task's retry sequence, and the
/// outcome. Appended to the aggregator exactly once and never mutated.
#[derive(Clone)]
pub struct AttemptResult {
    task: TaskHandle,
    attempt: u32,
    ok: bool,
}

impl AttemptResult {
    pub(crate) fn new(task: TaskHandle, attempt: u32, ok: bool) -> Self {
        Self { task, attempt, ok }
    }

    /// Returns the task this attempt belongs to.
    pub fn task(&self) -> &TaskHandle {
        &self.task
    }

    /// Returns the zero-based attempt index within the task's retry
    /// sequence.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Returns whether the attempt succeeded.
    pub fn is_ok(&self) -> bool {
        self.ok
    }
}

/// Read-only snapshot of a finished (or in-flight) run.
///
/// Produced by [`Scheduler::summary`](crate::Scheduler::summary). After
/// `stop()` the values are final; during the run they may be stale or
/// partial by design.
#[derive(Clone)]
pub struct Summary {
    /// Number of tasks enqueued before registration closed.
    pub registered: usize,
    /// Total attempts executed across all tasks.
    pub attempts: u32,
    /// Attempts that ended in failure.
    pub failed: u32,
    /// Every recorded attempt, in aggregation order.
    pub results: Vec<AttemptResult>,
}

impl Summary {
    /// Attempts that succeeded.
    pub fn succeeded(&self) -> u32 {
        self.attempts.saturating_sub(self.failed)
    }

    /// Renders the bordered report table.
    ///
    /// The inner width is the maximum of 40 and the longest task name plus
    /// the fixed per-row suffix width.
    pub fn render(&self) -> String {
        let longest_name = self
            .results
            .iter()
            .map(|r| r.task().name().chars().count())
            .max()
            .unwrap_or(0);
        let inner = (longest_name + FIXED_SUFFIX_WIDTH).max(MIN_INNER_WIDTH);

        let top = format!("╔{}╗\n", "═".repeat(inner));
        let middle = format!("╠{}╣\n", "═".repeat(inner));
        let bottom = format!("╚{}╝\n", "═".repeat(inner));

        let mut out = String::new();
        out.push_str(&top);
        out.push_str(&format!("║{}║\n", center("Scheduler Execution Report", inner)));
        out.push_str(&middle);

        let stats = [
            ("Registered tasks", self.registered as u32),
            ("Total executions", self.attempts),
            ("Successful executions", self.succeeded()),
            ("Failed executions", self.failed),
        ];
        for (label, value) in stats {
            let txt = format!("{label:<23} : {value:>5}");
            out.push_str(&format!("║ {txt:<width$}║\n", width = inner - 1));
        }

        out.push_str(&middle);
        out.push_str(&format!("║{}║\n", center("Per-Task Results", inner)));
        out.push_str(&middle);

        for result in &self.results {
            let status = if result.is_ok() { "OK " } else { "ERR" };
            let line = format!(
                "{name:<name_width$} rep:{rep:>3} ➜ {status}",
                name = result.task().name(),
                name_width = longest_name,
                rep = result.attempt(),
            );
            out.push_str(&format!("║ {line:<width$}║\n", width = inner - 1));
        }

        out.push_str(&bottom);
        out
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Centers `s` within `width` columns, padding with spaces.
fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
}
