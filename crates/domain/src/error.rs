//! Common error types used across the workspace.
//!
//! Every failure the panel can observe collapses into one of two kinds. Both
//! end up as the same user-visible message; the distinction only matters for
//! logs and tests.

/// Boxed source error carried by [`PanelError`] variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure talking to the camera device.
#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    /// The request never produced a response (network down, DNS, refused…).
    #[error("device unreachable")]
    Transport(#[source] BoxError),

    /// The device answered but the body is not what the endpoint promises.
    #[error("malformed device response")]
    Malformed(#[source] BoxError),
}

impl PanelError {
    /// Whether the request never reached the device.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(Box::new(err))
    }
}
