//! Destructive device actions that need the user's explicit confirmation.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemAction {
    /// Wipe the settings stored in the device's non-volatile memory.
    ClearSettings,
    Reboot,
}

impl SystemAction {
    /// Device endpoint that performs the action.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::ClearSettings => "/reset",
            Self::Reboot => "/reboot",
        }
    }

    /// Question shown before anything is sent.
    #[must_use]
    pub fn confirmation_prompt(self) -> &'static str {
        match self {
            Self::ClearSettings => "Clear all saved settings from memory and reboot?",
            Self::Reboot => "Reboot the camera? This will disconnect all clients.",
        }
    }
}

impl fmt::Display for SystemAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClearSettings => f.write_str("clear settings"),
            Self::Reboot => f.write_str("reboot"),
        }
    }
}

/// What happened when a destructive action was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The user said no; nothing was sent.
    Declined,
    /// The device answered with this plain-text reply.
    Completed { reply: String },
}
