//! Device client wrapping `gloo-net`; every request is same-origin.

use campanel_app::ports::DeviceClient;
use campanel_domain::endpoint::{ControlRequest, Endpoint};
use campanel_domain::error::PanelError;
use campanel_domain::status::StatusSnapshot;
use campanel_domain::system::SystemAction;
use gloo_net::http::Request;

/// Error returned when the browser could not complete a request.
#[derive(Debug, Clone)]
pub struct WebError {
    pub message: String,
}

impl std::fmt::Display for WebError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for WebError {}

impl From<gloo_net::Error> for WebError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<WebError> for PanelError {
    fn from(err: WebError) -> Self {
        Self::Transport(Box::new(err))
    }
}

/// GET `endpoint` relative to the page and return the body as text.
///
/// The status code is not looked at: the device answers in plain text
/// either way.
async fn get_text(endpoint: &Endpoint) -> Result<String, WebError> {
    let resp = Request::get(&endpoint.path_and_query()).send().await?;
    Ok(resp.text().await?)
}

/// Talks to the device that served the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooDeviceClient;

impl DeviceClient for GlooDeviceClient {
    async fn fetch_status(&self) -> Result<StatusSnapshot, PanelError> {
        let body = get_text(&Endpoint::Status).await?;
        StatusSnapshot::from_json(&body)
    }

    async fn send_control(&self, request: &ControlRequest) -> Result<String, PanelError> {
        Ok(get_text(&Endpoint::Control(request.clone())).await?)
    }

    async fn trigger(&self, action: SystemAction) -> Result<String, PanelError> {
        Ok(get_text(&Endpoint::System(action)).await?)
    }
}
