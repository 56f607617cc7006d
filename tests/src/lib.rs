//! Scenario tests for the session controllers, run on a paused tokio clock.

#[cfg(test)]
mod scan {
    mod integration;
}

#[cfg(test)]
mod connection {
    mod integration;
}
