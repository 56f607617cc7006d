//! Waiting on a busy page.

use std::time::Duration;

use huntdeck_common::config::Config;
use huntdeck_core::session::{Session, Views};

use crate::terminal::input::InputHandle;
use crate::terminal::spinner::PageSpinner;

const INPUT_POLL: Duration = Duration::from_millis(100);

/// Waits until the page's operation resolves.
///
/// Returns `None` when the user left the page first (`q` / Ctrl-C). The
/// caller then tears its controller down.
pub async fn wait_until_settled<S: Session>(
    mut views: Views<S>,
    page: &'static str,
    busy_text: &str,
    cfg: &Config,
) -> Option<S::View> {
    let input: Option<InputHandle> = (!cfg.disable_input).then(InputHandle::start);
    let _spinner = PageSpinner::start(page, busy_text, input.is_some());
    let mut poll = tokio::time::interval(INPUT_POLL);

    loop {
        tokio::select! {
            view = views.settled() => return view,
            _ = poll.tick() => {
                if input.as_ref().is_some_and(InputHandle::should_interrupt) {
                    return None;
                }
            }
        }
    }
}
