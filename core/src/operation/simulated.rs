//! Timer-backed stand-in for real work.
//!
//! Nothing is sent anywhere; the operation sleeps for its delay and succeeds.

use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;

use super::Operation;

/// Latency of every reconnaissance scan.
pub const RECON_DELAY: Duration = Duration::from_millis(2_000);
/// Latency of a vulnerability scan.
pub const VULN_DELAY: Duration = Duration::from_millis(3_000);
/// Latency of an LLM connection test.
pub const CONNECT_DELAY: Duration = Duration::from_millis(1_500);

pub struct SimulatedOperation<I> {
    delay: Duration,
    _input: PhantomData<fn(I)>,
}

impl<I> SimulatedOperation<I> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            _input: PhantomData,
        }
    }
}

impl<I> fmt::Debug for SimulatedOperation<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedOperation")
            .field("delay", &self.delay)
            .finish()
    }
}

#[async_trait]
impl<I: Send + 'static> Operation for SimulatedOperation<I> {
    type Input = I;

    async fn execute(&self, _input: I) -> anyhow::Result<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn resolves_after_exactly_its_delay() {
        let operation = SimulatedOperation::<()>::new(CONNECT_DELAY);
        let start = Instant::now();

        operation.execute(()).await.unwrap();

        assert_eq!(start.elapsed(), CONNECT_DELAY);
    }
}
