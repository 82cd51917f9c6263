//! # campanel-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceClient`: the camera's `/status`, `/control`, `/reset`, `/reboot`
//!   - `StatusDisplay`: the status text container
//!   - `Timer`: cancellable one-shot delays
//!   - `ControlSurface`: the form controls bound to device variables
//!   - `UserPrompt`: blocking confirm / acknowledge dialogs
//! - Define the use-cases as service structs:
//!   - `StatusPoller`: self-rescheduling status loop
//!   - `ControlSynchronizer`: hydrate controls, forward edits, mirror labels
//!   - `SystemActions`: confirmed clear-settings and reboot
//!
//! ## Dependency rule
//! Depends on `campanel-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
