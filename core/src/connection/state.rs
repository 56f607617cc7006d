use huntdeck_common::error::SessionError;
use huntdeck_common::session::endpoint::LlmEndpoint;

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionStatus {
    Disconnected,
    Testing,
    /// Sticky: there is no way back to `Disconnected`.
    Connected,
    /// The connection test returned an error. A new test may be started.
    Failed(SessionError),
}

/// What the settings page, and anything gated on a live LLM, renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionView {
    pub connected: bool,
    pub testing: bool,
    /// URL bound by the last test; empty before the first one.
    pub endpoint: String,
    /// Model name, only once connected.
    pub model: Option<String>,
    pub failure: Option<SessionError>,
}

#[derive(Debug)]
pub struct ConnectionSession {
    status: ConnectionStatus,
    endpoint: Option<LlmEndpoint>,
    epoch: u64,
    closed: bool,
}

impl ConnectionSession {
    pub fn new() -> Self {
        Self {
            status: ConnectionStatus::Disconnected,
            endpoint: None,
            epoch: 0,
            closed: false,
        }
    }

    pub fn status(&self) -> &ConnectionStatus {
        &self.status
    }

    /// The configuration in use, once a test has succeeded.
    pub fn active_endpoint(&self) -> Option<&LlmEndpoint> {
        match self.status {
            ConnectionStatus::Connected => self.endpoint.as_ref(),
            _ => None,
        }
    }

    /// Moves the session to `Testing` with `endpoint` bound.
    pub fn begin(&mut self, endpoint: LlmEndpoint) -> Result<u64, SessionError> {
        if endpoint.url.is_empty() {
            return Err(SessionError::validation("endpoint"));
        }
        match self.status {
            ConnectionStatus::Testing => return Err(SessionError::conflict("connection test")),
            ConnectionStatus::Connected => return Err(SessionError::conflict("connection")),
            ConnectionStatus::Disconnected | ConnectionStatus::Failed(_) => {}
        }

        self.status = ConnectionStatus::Testing;
        self.endpoint = Some(endpoint);
        self.epoch += 1;
        Ok(self.epoch)
    }
}

impl Default for ConnectionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for ConnectionSession {
    type View = ConnectionView;

    fn view(&self) -> ConnectionView {
        let connected = self.status == ConnectionStatus::Connected;
        ConnectionView {
            connected,
            testing: self.is_busy(),
            endpoint: self
                .endpoint
                .as_ref()
                .map(|endpoint| endpoint.url.clone())
                .unwrap_or_default(),
            model: self.active_endpoint().map(|endpoint| endpoint.model.clone()),
            failure: match &self.status {
                ConnectionStatus::Failed(cause) => Some(cause.clone()),
                _ => None,
            },
        }
    }

    fn is_busy(&self) -> bool {
        self.status == ConnectionStatus::Testing
    }

    fn resolve(&mut self, epoch: u64, outcome: Result<(), SessionError>) -> bool {
        if self.closed || epoch != self.epoch || self.status != ConnectionStatus::Testing {
            return false;
        }

        self.status = match outcome {
            Ok(()) => ConnectionStatus::Connected,
            Err(cause) => ConnectionStatus::Failed(cause),
        };
        true
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local() -> LlmEndpoint {
        LlmEndpoint::new("http://localhost:1234/v1", "")
    }

    #[test]
    fn empty_endpoint_never_leaves_disconnected() {
        let mut session = ConnectionSession::new();

        for key in ["", "sk-test"] {
            let result = session.begin(LlmEndpoint::new("", key));
            assert_eq!(result, Err(SessionError::validation("endpoint")));
            assert_eq!(session.status(), &ConnectionStatus::Disconnected);
        }
    }

    #[test]
    fn testing_binds_the_endpoint_but_not_the_model() {
        let mut session = ConnectionSession::new();
        session.begin(local()).unwrap();

        let view = session.view();
        assert!(view.testing);
        assert!(!view.connected);
        assert_eq!(view.endpoint, "http://localhost:1234/v1");
        assert_eq!(view.model, None);
        assert!(session.active_endpoint().is_none());
    }

    #[test]
    fn connected_is_sticky() {
        let mut session = ConnectionSession::new();
        let epoch = session.begin(local()).unwrap();
        assert!(session.resolve(epoch, Ok(())));

        let retry = session.begin(LlmEndpoint::new("http://10.0.0.2:8000/v1", "key"));
        assert_eq!(retry, Err(SessionError::conflict("connection")));
        assert_eq!(session.view().endpoint, "http://localhost:1234/v1");
        assert_eq!(session.view().model.as_deref(), Some("llama-3.1-70b-instruct"));
    }

    #[test]
    fn failed_test_can_be_retried() {
        let mut session = ConnectionSession::new();
        let epoch = session.begin(local()).unwrap();
        session.resolve(epoch, Err(SessionError::OperationFailed("timed out".into())));
        assert_eq!(
            session.view().failure,
            Some(SessionError::OperationFailed("timed out".into()))
        );
        assert!(!session.view().connected);

        assert_eq!(session.begin(local()), Ok(epoch + 1));
        assert!(session.view().testing);
    }
}
