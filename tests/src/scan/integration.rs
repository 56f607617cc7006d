use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use huntdeck_common::error::SessionError;
use huntdeck_common::session::kind::{ReconScan, ScanKind};
use huntdeck_common::session::target::Target;
use huntdeck_core::operation::{Operation, RECON_DELAY, SimulatedOperation};
use huntdeck_core::scanner::{ScanController, ScanRequest, ScanStatus, ScanView};
use tokio::time::{self, Instant};

/// Lets spawned tasks run without moving the clock.
async fn settle_tasks() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

/// Counts how many operations were started and finished.
struct Counting {
    inner: SimulatedOperation<ScanRequest<ReconScan>>,
    started: Arc<AtomicUsize>,
    finished: Arc<AtomicUsize>,
}

#[async_trait]
impl Operation for Counting {
    type Input = ScanRequest<ReconScan>;

    async fn execute(&self, request: Self::Input) -> anyhow::Result<()> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.inner.execute(request).await?;
        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// `startScan("example.com", "passive")` then, after the delay,
/// `{ busy: false, resultKind: "passive" }`.
#[tokio::test(start_paused = true)]
async fn passive_scan_resolves_to_its_kind() {
    let mut controller = ScanController::recon();
    let mut views = controller.subscribe();

    controller.start_scan("example.com", ReconScan::Passive).unwrap();
    let view = views.settled().await.unwrap();

    assert!(!view.busy);
    assert_eq!(view.result_kind, Some(ReconScan::Passive));
    assert_eq!(controller.current_view(), view);
}

/// `startScan("", "passive")` leaves the view at `{ busy: false, resultKind: None }`.
#[tokio::test(start_paused = true)]
async fn empty_target_never_changes_the_view() {
    let mut controller = ScanController::recon();
    let before = controller.current_view();

    let result = controller.start_scan("", ReconScan::Passive);
    time::sleep(RECON_DELAY * 2).await;

    assert_eq!(result, Err(SessionError::Validation { field: "target" }));
    assert_eq!(controller.current_view(), before);
    assert_eq!(
        before,
        ScanView {
            busy: false,
            result_kind: None,
            target: None,
            failure: None
        }
    );
    assert_eq!(controller.status(), ScanStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn every_kind_goes_running_then_completed_after_exactly_the_delay() {
    let mut controller = ScanController::recon();
    let mut views = controller.subscribe();

    for kind in ReconScan::ALL {
        let start = Instant::now();
        controller.start_scan("10.10.10.10", *kind).unwrap();
        assert_eq!(controller.status(), ScanStatus::Running);

        settle_tasks().await;
        time::advance(RECON_DELAY - Duration::from_millis(1)).await;
        settle_tasks().await;
        assert!(controller.current_view().busy, "{kind} resolved early");

        let view = views.settled().await.unwrap();
        assert_eq!(start.elapsed(), RECON_DELAY);
        assert_eq!(view.result_kind, Some(*kind));
        assert_eq!(controller.status(), ScanStatus::Completed);
    }
}

#[tokio::test(start_paused = true)]
async fn second_start_while_running_keeps_the_in_flight_kind() {
    let started = Arc::new(AtomicUsize::new(0));
    let finished = Arc::new(AtomicUsize::new(0));
    let mut controller = ScanController::new(Counting {
        inner: SimulatedOperation::new(RECON_DELAY),
        started: Arc::clone(&started),
        finished: Arc::clone(&finished),
    });
    let mut views = controller.subscribe();

    controller.start_scan("example.com", ReconScan::Active).unwrap();
    settle_tasks().await;
    time::advance(Duration::from_millis(500)).await;

    let second = controller.start_scan("example.org", ReconScan::FullScan);
    assert_eq!(second, Err(SessionError::Conflict { operation: "scan" }));

    let view = views.settled().await.unwrap();
    assert_eq!(view.result_kind, Some(ReconScan::Active));
    assert_eq!(view.target, Some(Target::new("example.com")));

    settle_tasks().await;
    assert_eq!(started.load(Ordering::SeqCst), 1);
    assert_eq!(finished.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn busy_is_true_exactly_while_running() {
    let mut controller = ScanController::recon();
    let mut views = controller.subscribe();
    assert!(!controller.current_view().busy);

    controller.start_scan("example.com", ReconScan::TechStack).unwrap();
    let running = views.changed().await.unwrap();
    assert!(running.busy);
    assert_eq!(running.result_kind, None);

    let completed = views.changed().await.unwrap();
    assert!(!completed.busy);
    assert_eq!(completed.result_kind, Some(ReconScan::TechStack));

    controller.start_scan("example.com", ReconScan::SecurityHeaders).unwrap();
    let restarted = views.changed().await.unwrap();
    assert!(restarted.busy);
    // Only the latest result is retained; it is gone while the next scan runs.
    assert_eq!(restarted.result_kind, None);
}

#[tokio::test(start_paused = true)]
async fn teardown_before_the_timer_prevents_completion() {
    let started = Arc::new(AtomicUsize::new(0));
    let finished = Arc::new(AtomicUsize::new(0));
    let mut controller = ScanController::new(Counting {
        inner: SimulatedOperation::new(RECON_DELAY),
        started: Arc::clone(&started),
        finished: Arc::clone(&finished),
    });

    controller.start_scan("example.com", ReconScan::Permutation).unwrap();
    let mut views = controller.subscribe();

    time::sleep(Duration::from_millis(1_000)).await;
    controller.teardown();
    time::sleep(RECON_DELAY * 3).await;
    settle_tasks().await;

    assert_eq!(started.load(Ordering::SeqCst), 1);
    assert_eq!(finished.load(Ordering::SeqCst), 0);
    assert_eq!(views.changed().await, None);

    let last = views.current();
    assert!(last.busy);
    assert_eq!(last.result_kind, None);
}
