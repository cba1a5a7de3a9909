use std::time::Duration;

/// Stand-in for the round trip to the hiring backend.
///
/// Each call is an ordinary future: dropping it before it resolves skips whatever the caller
/// would have done afterwards, so no write can land once the owner is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub const fn none() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub async fn settle(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}
