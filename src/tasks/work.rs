//! # Unit-of-work abstraction and function-backed implementation.
//!
//! This module defines the [`Work`] trait (an async, zero-argument, fallible
//! callable) and a convenient function-backed implementation [`WorkFn`].
//! The common handle type is [`WorkRef`], an `Arc<dyn Work>` suitable for
//! sharing with the worker pool.
//!
//! Each call of [`Work::run`] is one attempt. Returning `Err` marks the
//! attempt failed; the retry loop decides whether another attempt follows.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TaskError;

/// # Asynchronous, fallible unit of work.
///
/// A `Work` implementation is invoked once per attempt by exactly one worker
/// at a time. It owns whatever state it needs; the scheduler never inspects
/// it beyond the success/failure outcome.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use taskpool::{TaskError, Work};
///
/// struct Ping;
///
/// #[async_trait]
/// impl Work for Ping {
///     async fn run(&self) -> Result<(), TaskError> {
///         // do work...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Work: Send + Sync + 'static {
    /// Executes one attempt to completion.
    async fn run(&self) -> Result<(), TaskError>;
}

/// Shared handle to a unit of work.
pub type WorkRef = Arc<dyn Work>;

/// Function-backed work implementation.
///
/// Wraps a closure that *creates* a new future per attempt, so repeated
/// attempts never share hidden mutable state. If shared state is needed,
/// capture an `Arc<...>` explicitly inside the closure.
#[derive(Debug)]
pub struct WorkFn<F> {
    f: F,
}

impl<F> WorkFn<F> {
    /// Creates a new function-backed unit of work.
    ///
    /// Prefer [`WorkFn::arc`] when you immediately need a [`WorkRef`].
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the work and returns it as a shared handle (`Arc<Self>`).
    ///
    /// ## Example
    /// ```
    /// use taskpool::{TaskError, WorkFn, WorkRef};
    ///
    /// let w: WorkRef = WorkFn::arc(|| async { Ok::<_, TaskError>(()) });
    /// ```
    pub fn arc(f: F) -> Arc<Self> {
        Arc::new(Self::new(f))
    }
}

#[async_trait]
impl<F, Fut> Work for WorkFn<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), TaskError>> + Send + 'static,
{
    async fn run(&self) -> Result<(), TaskError> {
        (self.f)().await
    }
}
