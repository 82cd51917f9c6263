//! Prompt port: blocking dialogs with the user.

/// Modal interaction with the user.
pub trait UserPrompt {
    /// Ask a yes/no question; `true` means the user confirmed.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user has to acknowledge.
    fn acknowledge(&self, message: &str);
}
