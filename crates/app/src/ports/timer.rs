//! Timer port: one-shot delays for the poll loop.

use std::future::Future;
use std::time::Duration;

/// Schedules one-shot delays.
///
/// The returned handle is a future that completes once `delay` has elapsed.
/// Dropping the handle before it completes cancels the timer.
pub trait Timer {
    type Handle: Future<Output = ()> + Unpin;

    fn schedule(&self, delay: Duration) -> Self::Handle;
}
