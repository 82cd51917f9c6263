//! Control surface port: the form elements bound to device variables.

use campanel_domain::control::{ControlElement, ControlValue};

/// The set of controls on the page.
///
/// Controls are addressed by their position in [`controls`](Self::controls),
/// not by variable name: several elements may drive the same variable.
pub trait ControlSurface {
    /// Every control, in document order.
    fn controls(&self) -> Vec<ControlElement>;

    /// Write a value into the control at position `slot`.
    fn apply(&self, slot: usize, value: &ControlValue);

    /// Update the label next to the ranged control at position `slot`.
    fn set_value_label(&self, slot: usize, text: &str);
}
