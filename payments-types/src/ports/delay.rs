//! Non-blocking delay port used to simulate gateway latency.

use std::time::Duration;

#[async_trait::async_trait]
pub trait Delay: Send + Sync + 'static {
    /// Suspends the current task for roughly `duration` without blocking
    /// the executor thread.
    async fn wait(&self, duration: Duration);
}
