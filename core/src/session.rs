//! Plumbing shared by every session controller.
//!
//! A session lives inside a [`watch`] channel owned by its controller and is
//! only mutated through it. Accepted transitions notify subscribers; rejected
//! calls leave the channel untouched.
//!
//! Resolutions are tagged with the epoch returned by the start that scheduled
//! them. A resolution is applied only while its epoch is current and the
//! session has not been closed.

use std::fmt::Debug;
use std::sync::Arc;

use huntdeck_common::error::SessionError;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::operation::{Operation, PendingOperation};

/// State machine behind a controller.
pub trait Session: Send + Sync + 'static {
    /// Read-only projection handed to renderers.
    type View: Clone + Debug + PartialEq;

    fn view(&self) -> Self::View;

    /// `true` while an operation is in flight.
    fn is_busy(&self) -> bool;

    /// Applies the outcome of the operation started at `epoch`.
    ///
    /// Returns `false`, leaving the session untouched, when the outcome is
    /// stale or the session is closed.
    fn resolve(&mut self, epoch: u64, outcome: Result<(), SessionError>) -> bool;

    /// Marks the session as torn down. No resolution applies after this.
    fn close(&mut self);
}

pub(crate) type SharedSession<S> = Arc<watch::Sender<S>>;

pub(crate) fn shared<S: Session>(session: S) -> SharedSession<S> {
    Arc::new(watch::Sender::new(session))
}

/// Runs `start` against the session, notifying subscribers only on success.
pub(crate) fn begin<S, F>(state: &SharedSession<S>, start: F) -> Result<u64, SessionError>
where
    S: Session,
    F: FnOnce(&mut S) -> Result<u64, SessionError>,
{
    let mut result = None;
    state.send_if_modified(|session| {
        let started = start(session);
        let accepted = started.is_ok();
        result = Some(started);
        accepted
    });
    result.unwrap_or_else(|| unreachable!("send_if_modified always runs its closure"))
}

/// Starts `operation` and schedules its single resolution.
///
/// The task only holds a weak reference to the session, so a controller that
/// is gone cannot be resurrected by a late resolution.
pub(crate) fn schedule<S, O>(
    state: &SharedSession<S>,
    operation: &Arc<O>,
    input: O::Input,
    epoch: u64,
) -> PendingOperation
where
    S: Session,
    O: Operation,
{
    let state = Arc::downgrade(state);
    let operation = Arc::clone(operation);

    PendingOperation::spawn(async move {
        let outcome = operation
            .execute(input)
            .await
            .map_err(|e| SessionError::OperationFailed(format!("{e:#}")));

        let Some(state) = state.upgrade() else {
            debug!(epoch, "session dropped before resolution");
            return;
        };

        if let Err(cause) = &outcome {
            debug!(epoch, %cause, "operation failed");
        }

        if !state.send_if_modified(|session| session.resolve(epoch, outcome)) {
            warn!(epoch, "resolution suppressed");
        }
    })
}

/// Closes the session without notifying subscribers.
pub(crate) fn close<S: Session>(state: &SharedSession<S>) {
    state.send_if_modified(|session| {
        session.close();
        false
    });
}

/// Subscription to a session's view.
///
/// Ends (`None`) once the owning controller has been torn down.
#[derive(Debug)]
pub struct Views<S> {
    rx: watch::Receiver<S>,
}

impl<S: Session> Views<S> {
    pub(crate) fn new(rx: watch::Receiver<S>) -> Self {
        Self { rx }
    }

    /// The latest view. Still available after teardown.
    pub fn current(&self) -> S::View {
        self.rx.borrow().view()
    }

    /// Waits for the next state change. A change not yet read is returned
    /// right away.
    pub async fn changed(&mut self) -> Option<S::View> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().view())
    }

    /// Waits until no operation is in flight. Returns immediately when the
    /// session is already idle.
    pub async fn settled(&mut self) -> Option<S::View> {
        let session = self.rx.wait_for(|session| !session.is_busy()).await.ok()?;
        Some(session.view())
    }
}

impl<S> Clone for Views<S> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
        }
    }
}
