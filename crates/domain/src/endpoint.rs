//! Device HTTP endpoints and request encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::system::SystemAction;

/// Characters left unescaped, matching `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query component.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// A single `var`/`val` assignment sent to `/control`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRequest {
    pub variable: String,
    pub value: String,
}

impl ControlRequest {
    #[must_use]
    pub fn new(variable: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            value: value.into(),
        }
    }

    /// Encoded query string, without the leading `?`.
    #[must_use]
    pub fn query(&self) -> String {
        format!(
            "var={}&val={}",
            encode_component(&self.variable),
            encode_component(&self.value)
        )
    }
}

/// Every device endpoint the panel talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Status,
    Control(ControlRequest),
    System(SystemAction),
}

impl Endpoint {
    /// Path relative to the device root, including the query when there is one.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        match self {
            Self::Status => "/status".to_string(),
            Self::Control(request) => format!("/control?{}", request.query()),
            Self::System(action) => action.path().to_string(),
        }
    }
}
