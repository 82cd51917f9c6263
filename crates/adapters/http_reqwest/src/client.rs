//! `reqwest`-backed device client.

use campanel_app::ports::DeviceClient;
use campanel_domain::endpoint::{ControlRequest, Endpoint};
use campanel_domain::error::PanelError;
use campanel_domain::status::StatusSnapshot;
use campanel_domain::system::SystemAction;
use url::Url;

use crate::error::HttpError;

/// Client for one camera device, addressed by its base URL.
#[derive(Debug, Clone)]
pub struct HttpDeviceClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpDeviceClient {
    /// Create a client for the device at `base_url` (e.g. `http://192.168.4.1`).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] or [`HttpError::UnsupportedScheme`]
    /// for a bad URL, or [`HttpError::Request`] if the HTTP client cannot be
    /// initialised.
    ///
    /// A path in `base_url` is kept as a prefix of every endpoint, so
    /// `http://host/cam` talks to `http://host/cam/status`.
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        let mut base = Url::parse(base_url)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(HttpError::UnsupportedScheme(base.scheme().to_string()));
        }
        if !base.path().ends_with('/') {
            let prefix = format!("{}/", base.path());
            base.set_path(&prefix);
        }
        // cameras live on the local network; never route them through a proxy
        let http = reqwest::Client::builder()
            .no_proxy()
            .user_agent(concat!("campanel/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, endpoint: &Endpoint) -> Result<Url, HttpError> {
        let path_and_query = endpoint.path_and_query();
        Ok(self.base.join(path_and_query.trim_start_matches('/'))?)
    }

    /// Issue one GET and return the body, whatever the status code.
    async fn get_text(&self, endpoint: &Endpoint) -> Result<String, HttpError> {
        let url = self.url(endpoint)?;
        let response = self.http.get(url).send().await?;
        tracing::trace!(status = %response.status(), path = %endpoint.path_and_query(), "device replied");
        Ok(response.text().await?)
    }
}

impl DeviceClient for HttpDeviceClient {
    async fn fetch_status(&self) -> Result<StatusSnapshot, PanelError> {
        let body = self.get_text(&Endpoint::Status).await?;
        StatusSnapshot::from_json(&body)
    }

    async fn send_control(&self, request: &ControlRequest) -> Result<String, PanelError> {
        Ok(self.get_text(&Endpoint::Control(request.clone())).await?)
    }

    async fn trigger(&self, action: SystemAction) -> Result<String, PanelError> {
        Ok(self.get_text(&Endpoint::System(action)).await?)
    }
}
