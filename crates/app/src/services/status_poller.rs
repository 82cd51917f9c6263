//! Status poller: keeps the status line best-effort current.
//!
//! The poller owns the only pending timer of the poll loop. Every cycle ends
//! by cancelling whatever is pending and scheduling exactly one next poll, so
//! two poll chains can never run side by side.

use std::time::Duration;

use campanel_domain::poll::{PollOutcome, PollState, PollTiming};
use campanel_domain::status::CONNECTION_ERROR_MESSAGE;

use crate::ports::{DeviceClient, StatusDisplay, Timer};

/// Self-rescheduling status poll loop.
pub struct StatusPoller<C, D, T: Timer> {
    client: C,
    display: D,
    timer: T,
    timing: PollTiming,
    state: PollState,
    pending: Option<T::Handle>,
}

impl<C, D, T> StatusPoller<C, D, T>
where
    C: DeviceClient,
    D: StatusDisplay,
    T: Timer,
{
    /// Create an idle poller with the default 100 ms / 5 s timing.
    pub fn new(client: C, display: D, timer: T) -> Self {
        Self {
            client,
            display,
            timer,
            timing: PollTiming::default(),
            state: PollState::Idle,
            pending: None,
        }
    }

    #[must_use]
    pub fn with_timing(mut self, timing: PollTiming) -> Self {
        self.timing = timing;
        self
    }

    #[must_use]
    pub fn state(&self) -> PollState {
        self.state
    }

    /// Whether a next poll is currently scheduled.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Arm the first poll after the initial delay.
    pub fn start(&mut self) {
        self.schedule(self.timing.initial_delay);
    }

    /// Drop the pending timer, if any. Returns whether one was cancelled.
    pub fn cancel_pending(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled && self.state == PollState::Scheduled {
            self.state = PollState::Idle;
        }
        cancelled
    }

    /// Cancel any pending timer, then arm a new one for `delay`.
    pub fn schedule(&mut self, delay: Duration) {
        self.cancel_pending();
        self.pending = Some(self.timer.schedule(delay));
        self.state = PollState::Scheduled;
    }

    /// Fetch the status once and write the result to the display.
    ///
    /// Whatever the outcome, the next poll is scheduled one interval later.
    /// Failures are never returned: they replace the status line with
    /// [`CONNECTION_ERROR_MESSAGE`] and the loop carries on.
    #[tracing::instrument(skip(self))]
    pub async fn poll(&mut self) -> PollOutcome {
        self.state = PollState::Fetching;

        let outcome = match self.client.fetch_status().await {
            Ok(status) => {
                let line = status.to_string();
                self.display.show(&line);
                PollOutcome::Rendered(line)
            }
            Err(err) => {
                tracing::debug!(error = ?err, "status poll failed");
                self.display.show(CONNECTION_ERROR_MESSAGE);
                PollOutcome::Failed
            }
        };

        self.schedule(self.timing.interval);
        outcome
    }

    /// Wait for the pending timer (if any) to fire, then poll.
    pub async fn tick(&mut self) -> PollOutcome {
        if let Some(handle) = self.pending.as_mut() {
            handle.await;
        }
        self.pending = None;
        self.poll().await
    }

    /// Run the loop for as long as the returned future is polled.
    pub async fn run(mut self) {
        self.start();
        loop {
            let outcome = self.tick().await;
            tracing::trace!(rendered = outcome.is_rendered(), "poll cycle finished");
        }
    }
}
