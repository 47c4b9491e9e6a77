use async_trait::async_trait;
use std::time::Duration;

/// Delay primitive used between polls
#[async_trait]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock delays on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
