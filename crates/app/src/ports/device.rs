//! Device port: the camera's HTTP endpoints.

use std::future::Future;

use campanel_domain::endpoint::ControlRequest;
use campanel_domain::error::PanelError;
use campanel_domain::status::StatusSnapshot;
use campanel_domain::system::SystemAction;

/// Client for the camera device.
///
/// Implementations issue exactly one request per call and never retry.
/// HTTP status codes are not inspected; only a missing response or an
/// unusable body is an error.
pub trait DeviceClient {
    /// `GET /status`, parsed into a snapshot.
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, PanelError>>;

    /// `GET /control?var=…&val=…`, returning the plain-text reply.
    fn send_control(
        &self,
        request: &ControlRequest,
    ) -> impl Future<Output = Result<String, PanelError>>;

    /// `GET /reset` or `GET /reboot`, returning the plain-text reply.
    fn trigger(&self, action: SystemAction) -> impl Future<Output = Result<String, PanelError>>;
}
