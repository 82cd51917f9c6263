//! Poll timer backed by `setTimeout`.

use std::time::Duration;

use campanel_app::ports::Timer;
use gloo_timers::future::TimeoutFuture;

/// Dropping a handle clears the underlying browser timeout.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    type Handle = TimeoutFuture;

    fn schedule(&self, delay: Duration) -> TimeoutFuture {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimeoutFuture::new(millis)
    }
}
