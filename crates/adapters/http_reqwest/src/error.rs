//! HTTP adapter error types.

use campanel_domain::error::PanelError;

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured device URL cannot be parsed or joined.
    #[error("invalid device URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The device URL is not `http` or `https`.
    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),

    /// reqwest failed to build the client, send, or read the body.
    #[error("HTTP request failed")]
    Request(#[from] reqwest::Error),
}

/// Every adapter failure means the device could not be talked to.
impl From<HttpError> for PanelError {
    fn from(err: HttpError) -> Self {
        Self::Transport(Box::new(err))
    }
}
