//! The scan session controller.
//!
//! Turns a target and a scan kind into a single in-flight operation and
//! exposes its progress as a [`ScanView`]. One controller backs one page; the
//! recon and vulnerability pages each build their own.

use std::sync::Arc;

use huntdeck_common::error::SessionError;
use huntdeck_common::session::kind::{ReconScan, ScanKind, VulnScan};
use huntdeck_common::session::target::Target;
use tracing::{debug, warn};

use crate::operation::{Operation, PendingOperation, RECON_DELAY, SimulatedOperation, VULN_DELAY};
use crate::session::{self, Session, SharedSession, Views};

mod state;

pub use state::{ScanSession, ScanStatus, ScanView};

/// Input handed to the scan operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRequest<K> {
    pub target: Target,
    pub kind: K,
}

pub struct ScanController<K: ScanKind, O = SimulatedOperation<ScanRequest<K>>> {
    state: SharedSession<ScanSession<K>>,
    operation: Arc<O>,
    pending: Option<PendingOperation>,
}

impl ScanController<ReconScan> {
    /// Controller for the reconnaissance page.
    pub fn recon() -> Self {
        Self::new(SimulatedOperation::new(RECON_DELAY))
    }
}

impl ScanController<VulnScan> {
    /// Controller for the vulnerability page.
    pub fn vulnerabilities() -> Self {
        Self::new(SimulatedOperation::new(VULN_DELAY))
    }
}

impl<K, O> ScanController<K, O>
where
    K: ScanKind,
    O: Operation<Input = ScanRequest<K>>,
{
    pub fn new(operation: O) -> Self {
        Self {
            state: session::shared(ScanSession::new()),
            operation: Arc::new(operation),
            pending: None,
        }
    }

    /// Starts a scan of `target`.
    ///
    /// Rejected without touching the session when the target is empty
    /// ([`SessionError::Validation`]) or a scan is already running
    /// ([`SessionError::Conflict`]). Must be called inside a tokio runtime.
    pub fn start_scan(&mut self, target: impl Into<Target>, kind: K) -> Result<(), SessionError> {
        let target: Target = target.into();

        let epoch = session::begin(&self.state, |session| session.begin(target.clone(), kind))
            .inspect_err(|e| warn!(%target, %kind, "scan rejected: {e}"))?;

        debug!(%target, %kind, epoch, "scan started");
        let request = ScanRequest { target, kind };
        self.pending = Some(session::schedule(&self.state, &self.operation, request, epoch));
        Ok(())
    }

    pub fn current_view(&self) -> ScanView<K> {
        self.state.borrow().view()
    }

    pub fn status(&self) -> ScanStatus {
        self.state.borrow().status().clone()
    }

    pub fn subscribe(&self) -> Views<ScanSession<K>> {
        Views::new(self.state.subscribe())
    }

    /// Tears the controller down. Same as dropping it.
    pub fn teardown(self) {
        drop(self);
    }
}

impl<K: ScanKind, O> Drop for ScanController<K, O> {
    fn drop(&mut self) {
        session::close(&self.state);
        if let Some(pending) = self.pending.take() {
            if !pending.is_finished() {
                debug!("pending scan cancelled");
            }
            pending.cancel();
        }
    }
}
