use crate::domain::model::SubmissionRecord;
use crate::domain::ports::{Sleeper, SubmissionTransport};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::rc::Rc;
use std::time::Duration;

/// Stands in for a backend: waits out a fixed delay and reports success.
pub struct SimulatedTransport {
    sleeper: Rc<dyn Sleeper>,
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(sleeper: Rc<dyn Sleeper>, delay: Duration) -> Self {
        Self { sleeper, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait(?Send)]
impl SubmissionTransport for SimulatedTransport {
    async fn deliver(&self, record: &SubmissionRecord) -> Result<()> {
        tracing::debug!(
            delay_ms = self.delay.as_millis() as u64,
            email = %record.fields.email,
            "simulating service request delivery"
        );
        self.sleeper.sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::domain::model::FormFields;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_simulated_transport_waits_the_configured_delay() {
        let transport = SimulatedTransport::new(Rc::new(TokioSleeper), Duration::from_millis(1500));
        let record = SubmissionRecord::captured_now(FormFields::new(
            "Jo",
            "jo@x.co",
            "1234567890",
            "Lawn mowing weekly",
        ));

        let started = Instant::now();
        tokio_test::assert_ok!(transport.deliver(&record).await);
        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(transport.delay(), Duration::from_millis(1500));
    }
}
