//! Display port: the single status text container.

/// Where the status line is shown. Only ever written, never read back.
pub trait StatusDisplay {
    /// Replace the displayed text.
    fn show(&self, text: &str);
}
