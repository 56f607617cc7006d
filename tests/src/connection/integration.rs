use std::time::Duration;

use async_trait::async_trait;
use huntdeck_common::error::SessionError;
use huntdeck_common::session::endpoint::LlmEndpoint;
use huntdeck_core::connection::{ConnectionController, ConnectionStatus};
use huntdeck_core::operation::{CONNECT_DELAY, Operation};
use tokio::time::{self, Instant};

/// Stands in for an LLM server that is not listening.
struct Unreachable;

#[async_trait]
impl Operation for Unreachable {
    type Input = LlmEndpoint;

    async fn execute(&self, endpoint: LlmEndpoint) -> anyhow::Result<()> {
        time::sleep(Duration::from_millis(250)).await;
        Err(anyhow::anyhow!("connection refused").context(format!("GET {}/models", endpoint.url)))
    }
}

/// `connect("http://localhost:1234/v1", "")`: testing right away, connected
/// after 1500 ms with the endpoint bound.
#[tokio::test(start_paused = true)]
async fn local_endpoint_without_key_connects() {
    let mut controller = ConnectionController::simulated();
    let mut views = controller.subscribe();
    let start = Instant::now();

    controller
        .connect(LlmEndpoint::new("http://localhost:1234/v1", ""))
        .unwrap();

    let view = controller.current_view();
    assert!(view.testing);
    assert!(!view.connected);

    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
    time::advance(CONNECT_DELAY - Duration::from_millis(1)).await;
    assert!(controller.current_view().testing);

    let view = views.settled().await.unwrap();
    assert_eq!(start.elapsed(), CONNECT_DELAY);
    assert!(!view.testing);
    assert!(view.connected);
    assert_eq!(view.endpoint, "http://localhost:1234/v1");
}

#[tokio::test(start_paused = true)]
async fn empty_endpoint_stays_disconnected() {
    let mut controller = ConnectionController::simulated();

    for key in ["", "sk-anything"] {
        let result = controller.connect(LlmEndpoint::new("", key));
        assert_eq!(result, Err(SessionError::Validation { field: "endpoint" }));
    }
    time::sleep(CONNECT_DELAY * 2).await;

    assert_eq!(controller.status(), ConnectionStatus::Disconnected);
    assert_eq!(controller.current_view().endpoint, "");
}

#[tokio::test(start_paused = true)]
async fn unreachable_server_fails_and_keeps_the_llm_gate_closed() {
    let mut controller = ConnectionController::new(Unreachable);
    let mut views = controller.subscribe();

    controller.connect(LlmEndpoint::default()).unwrap();
    let view = views.settled().await.unwrap();

    assert!(!view.connected);
    assert_eq!(
        view.failure,
        Some(SessionError::OperationFailed(
            "GET http://localhost:1234/v1/models: connection refused".into()
        ))
    );
    assert_eq!(controller.ensure_connected(), Err(SessionError::NotConnected));

    // A failed test may be retried.
    assert!(controller.connect(LlmEndpoint::default()).is_ok());
    assert_eq!(controller.status(), ConnectionStatus::Testing);
}

#[tokio::test(start_paused = true)]
async fn connected_state_is_sticky() {
    let mut controller = ConnectionController::simulated();
    controller.connect(LlmEndpoint::default()).unwrap();
    controller.subscribe().settled().await.unwrap();

    let again = controller.connect(LlmEndpoint::new("http://192.168.0.20:1234/v1", "key"));
    assert_eq!(again, Err(SessionError::Conflict { operation: "connection" }));

    time::sleep(CONNECT_DELAY * 2).await;
    let view = controller.current_view();
    assert!(view.connected);
    assert_eq!(view.endpoint, "http://localhost:1234/v1");
    assert_eq!(view.model.as_deref(), Some("llama-3.1-70b-instruct"));
}
