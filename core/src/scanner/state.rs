use huntdeck_common::error::SessionError;
use huntdeck_common::session::kind::ScanKind;
use huntdeck_common::session::target::Target;

use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStatus {
    /// Nothing has been scanned yet. Never re-entered.
    Idle,
    Running,
    Completed,
    /// The operation returned an error.
    Failed(SessionError),
}

/// What a scan page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanView<K> {
    pub busy: bool,
    /// The kind that resolved; only set while the session is completed.
    pub result_kind: Option<K>,
    /// The target bound at the last start.
    pub target: Option<Target>,
    pub failure: Option<SessionError>,
}

/// One controller's current or most recent scan.
///
/// Only the latest result is ever kept; a new start supersedes it.
#[derive(Debug)]
pub struct ScanSession<K> {
    status: ScanStatus,
    active_kind: Option<K>,
    target: Option<Target>,
    epoch: u64,
    closed: bool,
}

impl<K: ScanKind> ScanSession<K> {
    pub fn new() -> Self {
        Self {
            status: ScanStatus::Idle,
            active_kind: None,
            target: None,
            epoch: 0,
            closed: false,
        }
    }

    pub fn status(&self) -> &ScanStatus {
        &self.status
    }

    pub fn active_kind(&self) -> Option<K> {
        self.active_kind
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// Moves the session to `Running`, returning the epoch of this start.
    ///
    /// The session is left untouched when the target is empty or a scan is
    /// already running.
    pub fn begin(&mut self, target: Target, kind: K) -> Result<u64, SessionError> {
        if target.is_empty() {
            return Err(SessionError::validation("target"));
        }
        if self.status == ScanStatus::Running {
            return Err(SessionError::conflict("scan"));
        }

        self.status = ScanStatus::Running;
        self.active_kind = Some(kind);
        self.target = Some(target);
        self.epoch += 1;
        Ok(self.epoch)
    }
}

impl<K: ScanKind> Default for ScanSession<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ScanKind> Session for ScanSession<K> {
    type View = ScanView<K>;

    fn view(&self) -> ScanView<K> {
        let result_kind = match self.status {
            ScanStatus::Completed => self.active_kind,
            _ => None,
        };
        let failure = match &self.status {
            ScanStatus::Failed(cause) => Some(cause.clone()),
            _ => None,
        };

        ScanView {
            busy: self.is_busy(),
            result_kind,
            target: self.target.clone(),
            failure,
        }
    }

    fn is_busy(&self) -> bool {
        self.status == ScanStatus::Running
    }

    fn resolve(&mut self, epoch: u64, outcome: Result<(), SessionError>) -> bool {
        if self.closed || epoch != self.epoch || self.status != ScanStatus::Running {
            return false;
        }

        self.status = match outcome {
            Ok(()) => ScanStatus::Completed,
            Err(cause) => ScanStatus::Failed(cause),
        };
        true
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use huntdeck_common::session::kind::ReconScan;

    use super::*;

    fn running(kind: ReconScan) -> (ScanSession<ReconScan>, u64) {
        let mut session = ScanSession::new();
        let epoch = session.begin(Target::new("example.com"), kind).unwrap();
        (session, epoch)
    }

    #[test]
    fn fresh_session_is_idle_without_result() {
        let session = ScanSession::<ReconScan>::new();
        assert_eq!(session.status(), &ScanStatus::Idle);
        assert_eq!(
            session.view(),
            ScanView {
                busy: false,
                result_kind: None,
                target: None,
                failure: None
            }
        );
    }

    #[test]
    fn empty_target_leaves_session_untouched() {
        let mut session = ScanSession::<ReconScan>::new();
        let result = session.begin(Target::new(""), ReconScan::Passive);

        assert_eq!(result, Err(SessionError::validation("target")));
        assert_eq!(session.status(), &ScanStatus::Idle);
        assert_eq!(session.active_kind(), None);
    }

    #[test]
    fn second_start_keeps_the_in_flight_kind() {
        let (mut session, _) = running(ReconScan::Passive);
        let result = session.begin(Target::new("other.com"), ReconScan::TopPorts);

        assert_eq!(result, Err(SessionError::conflict("scan")));
        assert_eq!(session.active_kind(), Some(ReconScan::Passive));
        assert_eq!(session.target(), Some(&Target::new("example.com")));
    }

    #[test]
    fn resolution_exposes_the_kind_only_once_completed() {
        let (mut session, epoch) = running(ReconScan::TechStack);
        assert!(session.view().busy);
        assert_eq!(session.view().result_kind, None);

        assert!(session.resolve(epoch, Ok(())));
        let view = session.view();
        assert!(!view.busy);
        assert_eq!(view.result_kind, Some(ReconScan::TechStack));
    }

    #[test]
    fn stale_and_duplicate_resolutions_are_ignored() {
        let (mut session, epoch) = running(ReconScan::Active);
        assert!(!session.resolve(epoch + 1, Ok(())));
        assert!(session.resolve(epoch, Ok(())));
        assert!(!session.resolve(epoch, Err(SessionError::OperationFailed("late".into()))));
        assert_eq!(session.status(), &ScanStatus::Completed);
    }

    #[test]
    fn closed_session_never_resolves() {
        let (mut session, epoch) = running(ReconScan::FullScan);
        session.close();

        assert!(!session.resolve(epoch, Ok(())));
        assert_eq!(session.status(), &ScanStatus::Running);
    }

    #[test]
    fn failure_carries_its_cause_and_allows_a_restart() {
        let (mut session, epoch) = running(ReconScan::AiAnalysis);
        let refused = SessionError::OperationFailed("connection refused".into());
        assert!(session.resolve(epoch, Err(refused.clone())));

        let view = session.view();
        assert!(!view.busy);
        assert_eq!(view.result_kind, None);
        assert_eq!(view.failure, Some(refused));

        let next = session.begin(Target::new("example.com"), ReconScan::Passive);
        assert_eq!(next, Ok(epoch + 1));
        assert_eq!(session.view().failure, None);
    }

    #[test]
    fn completed_session_never_returns_to_idle() {
        let (mut session, epoch) = running(ReconScan::Passive);
        session.resolve(epoch, Ok(()));
        let epoch = session.begin(Target::new("example.com"), ReconScan::Bruteforce).unwrap();

        assert_eq!(session.status(), &ScanStatus::Running);
        // The previous result is superseded as soon as the new scan starts.
        assert_eq!(session.view().result_kind, None);

        session.resolve(epoch, Ok(()));
        assert_eq!(session.view().result_kind, Some(ReconScan::Bruteforce));
    }
}
