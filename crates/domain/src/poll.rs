//! Status poll cycle: states, outcomes and timing.

use std::fmt;
use std::time::Duration;

/// Delay before the first poll after start-up.
pub const INITIAL_DELAY: Duration = Duration::from_millis(100);

/// Delay between the end of one poll and the start of the next.
pub const POLL_INTERVAL: Duration = Duration::from_millis(5000);

/// Where the poller currently is in its cycle.
///
/// ```text
/// Idle ──start──▶ Scheduled ──timer fires──▶ Fetching ──rendered/failed──▶ Scheduled ──▶ …
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollState {
    #[default]
    Idle,
    /// A status request is in flight.
    Fetching,
    /// Exactly one timer is pending for the next poll.
    Scheduled,
}

impl fmt::Display for PollState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Fetching => f.write_str("fetching"),
            Self::Scheduled => f.write_str("scheduled"),
        }
    }
}

/// Result of one poll, after the display has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// The status line was rendered.
    Rendered(String),
    /// The fixed connection-error text was shown instead.
    Failed,
}

impl PollOutcome {
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered(_))
    }
}

/// Delays driving the poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollTiming {
    pub initial_delay: Duration,
    pub interval: Duration,
}

impl Default for PollTiming {
    fn default() -> Self {
        Self {
            initial_delay: INITIAL_DELAY,
            interval: POLL_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_idle() {
        assert_eq!(PollState::default(), PollState::Idle);
    }

    #[test]
    fn should_use_browser_timing_by_default() {
        let timing = PollTiming::default();
        assert_eq!(timing.initial_delay, Duration::from_millis(100));
        assert_eq!(timing.interval, Duration::from_secs(5));
    }

    #[test]
    fn should_display_lowercase_state_name() {
        assert_eq!(PollState::Scheduled.to_string(), "scheduled");
    }
}
