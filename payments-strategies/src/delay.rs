//! Latency adapters for the `Delay` port.

use std::time::Duration;

use async_trait::async_trait;
use payments_types::Delay;
use rand::Rng;

/// Sleeps on the tokio timer, optionally adding up to `max_jitter` of
/// random extra latency per call.
#[derive(Debug, Clone, Default)]
pub struct TokioDelay {
    max_jitter: Duration,
}

impl TokioDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jitter(max_jitter: Duration) -> Self {
        Self { max_jitter }
    }

    fn jitter(&self) -> Duration {
        if self.max_jitter.is_zero() {
            return Duration::ZERO;
        }
        let max_ms = u64::try_from(self.max_jitter.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(rand::rng().random_range(0..=max_ms))
    }
}

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        let total = duration + self.jitter();
        tokio::time::sleep(total).await;
    }
}

/// Returns immediately. Used when latency simulation is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}
