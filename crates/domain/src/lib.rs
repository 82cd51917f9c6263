//! # campanel-domain
//!
//! Pure domain model for the camera control panel.
//!
//! ## Responsibilities
//! - Foundational types: error taxonomy, device endpoints and query encoding
//! - Define the **status snapshot** and its one-line rendering
//! - Define **controls** (toggle, select, ranged, text-like) and how an
//!   embedded initial value hydrates each of them
//! - Define the **poll cycle** states and timing
//! - Define the destructive **system actions** (clear settings, reboot)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod endpoint;
pub mod error;

pub mod control;
pub mod poll;
pub mod status;
pub mod system;
