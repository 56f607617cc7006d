//! The connection session controller.
//!
//! Gates AI-dependent affordances behind a successful connection test against
//! an LLM endpoint. Once connected the session stays connected for the life
//! of the controller.

use std::sync::Arc;

use huntdeck_common::error::SessionError;
use huntdeck_common::session::endpoint::LlmEndpoint;
use tracing::{debug, warn};

use crate::operation::{CONNECT_DELAY, Operation, PendingOperation, SimulatedOperation};
use crate::session::{self, Session, SharedSession, Views};

mod state;

pub use state::{ConnectionSession, ConnectionStatus, ConnectionView};

pub struct ConnectionController<O = SimulatedOperation<LlmEndpoint>> {
    state: SharedSession<ConnectionSession>,
    operation: Arc<O>,
    pending: Option<PendingOperation>,
}

impl ConnectionController {
    /// Controller for the settings page.
    pub fn simulated() -> Self {
        Self::new(SimulatedOperation::new(CONNECT_DELAY))
    }
}

impl<O> ConnectionController<O>
where
    O: Operation<Input = LlmEndpoint>,
{
    pub fn new(operation: O) -> Self {
        Self {
            state: session::shared(ConnectionSession::new()),
            operation: Arc::new(operation),
            pending: None,
        }
    }

    /// Tests `endpoint` and binds it on success.
    ///
    /// The API key may be empty. Rejected without touching the session when
    /// the URL is empty, a test is running, or the session is connected.
    pub fn connect(&mut self, endpoint: LlmEndpoint) -> Result<(), SessionError> {
        let url = endpoint.url.clone();
        let input = endpoint.clone();

        let epoch = session::begin(&self.state, |session| session.begin(endpoint))
            .inspect_err(|e| warn!(%url, "connection test rejected: {e}"))?;

        debug!(%url, epoch, "connection test started");
        self.pending = Some(session::schedule(&self.state, &self.operation, input, epoch));
        Ok(())
    }

    /// The bound configuration, for callers that need a live LLM.
    pub fn ensure_connected(&self) -> Result<LlmEndpoint, SessionError> {
        self.state
            .borrow()
            .active_endpoint()
            .cloned()
            .ok_or(SessionError::NotConnected)
    }

    pub fn current_view(&self) -> ConnectionView {
        self.state.borrow().view()
    }

    pub fn status(&self) -> ConnectionStatus {
        self.state.borrow().status().clone()
    }

    pub fn subscribe(&self) -> Views<ConnectionSession> {
        Views::new(self.state.subscribe())
    }

    pub fn teardown(self) {
        drop(self);
    }
}

impl<O> Drop for ConnectionController<O> {
    fn drop(&mut self) {
        session::close(&self.state);
        if let Some(pending) = self.pending.take() {
            if !pending.is_finished() {
                debug!("pending connection test cancelled");
            }
            pending.cancel();
        }
    }
}
