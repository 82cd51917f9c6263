//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod control_sync;
pub mod status_poller;
pub mod system_actions;

pub use control_sync::ControlSynchronizer;
pub use status_poller::StatusPoller;
pub use system_actions::SystemActions;
