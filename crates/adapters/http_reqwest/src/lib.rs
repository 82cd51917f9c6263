//! # campanel-adapter-http-reqwest
//!
//! Native adapter that talks to the camera device over HTTP.
//!
//! ## Responsibilities
//! - Implement `DeviceClient` with `reqwest` against a configurable base URL
//! - Implement `Timer` with `tokio::time::sleep`
//! - Map HTTP client failures into the domain error taxonomy
//!
//! ## Dependency rule
//! Depends on `campanel-app` (port traits) and `campanel-domain` only.

mod client;
mod error;
mod timer;

pub use client::HttpDeviceClient;
pub use error::HttpError;
pub use timer::TokioTimer;
