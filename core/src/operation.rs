//! The **abstraction** a controller uses to run the work behind a session.
//!
//! A controller never knows whether the work is a timer, a network probe or a
//! call to an LLM server. It hands an input to an [`Operation`], keeps the
//! returned [`PendingOperation`] as its handle and cancels by dropping it.

use std::future::Future;

use async_trait::async_trait;
use tokio::task::AbortHandle;

pub mod simulated;

pub use simulated::{CONNECT_DELAY, RECON_DELAY, SimulatedOperation, VULN_DELAY};

/// Work started by a session controller.
///
/// `execute` resolving with `Ok` completes the session, an `Err` moves it to
/// its failed state carrying the error chain as cause.
#[async_trait]
pub trait Operation: Send + Sync + 'static {
    type Input: Send + 'static;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Handle to an operation running on the tokio runtime.
///
/// Dropping the handle aborts the task. Aborting a finished task is a no-op.
#[derive(Debug)]
pub struct PendingOperation {
    handle: AbortHandle,
}

impl PendingOperation {
    /// Spawns `future` on the current runtime.
    ///
    /// # Panics
    /// Outside of a tokio runtime, like [`tokio::spawn`].
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let task = tokio::spawn(future);
        Self {
            handle: task.abort_handle(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for PendingOperation {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
