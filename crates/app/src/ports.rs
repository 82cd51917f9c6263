//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.
//!
//! None of the futures here are required to be `Send`: the panel runs on a
//! single-threaded event loop, and browser futures never are.

pub mod controls;
pub mod device;
pub mod display;
pub mod prompt;
pub mod timer;

pub use controls::ControlSurface;
pub use device::DeviceClient;
pub use display::StatusDisplay;
pub use prompt::UserPrompt;
pub use timer::Timer;
