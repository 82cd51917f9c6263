//! Tokio-backed poll timer.

use std::pin::Pin;
use std::time::Duration;

use campanel_app::ports::Timer;
use tokio::time::Sleep;

/// One-shot delays on the tokio clock. Dropping a handle cancels it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    type Handle = Pin<Box<Sleep>>;

    fn schedule(&self, delay: Duration) -> Self::Handle {
        Box::pin(tokio::time::sleep(delay))
    }
}
