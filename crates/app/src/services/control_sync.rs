//! Control synchronizer: hydrates controls at load and forwards user edits.

use campanel_domain::control::ControlElement;
use campanel_domain::endpoint::ControlRequest;
use campanel_domain::status::CONNECTION_ERROR_MESSAGE;

use crate::ports::{ControlSurface, DeviceClient, StatusDisplay};

/// Keeps form controls and device variables in step.
pub struct ControlSynchronizer<C, D> {
    client: C,
    display: D,
}

impl<C, D> ControlSynchronizer<C, D>
where
    C: DeviceClient,
    D: StatusDisplay,
{
    pub fn new(client: C, display: D) -> Self {
        Self { client, display }
    }

    /// Apply every embedded initial value to its control.
    ///
    /// Ranged controls also get their label refreshed so it starts out
    /// matching the hydrated value. Returns the number of controls hydrated.
    pub fn hydrate(&self, surface: &impl ControlSurface) -> usize {
        let mut hydrated = 0;
        for (slot, control) in surface.controls().iter().enumerate() {
            let Some(value) = control.hydrated_value() else {
                continue;
            };
            surface.apply(slot, &value);
            self.report_live_value(surface, slot, control, value.wire_value());
            hydrated += 1;
        }
        tracing::debug!(hydrated, "controls hydrated");
        hydrated
    }

    /// Send one variable assignment to the device.
    ///
    /// Fire-and-forget: the reply is not interpreted and nothing is retried.
    /// A transport failure only overwrites the status line with the generic
    /// connection error; the control keeps whatever value the user chose.
    /// Returns whether the device answered at all.
    #[tracing::instrument(skip(self))]
    pub async fn set_control(&self, variable: &str, value: &str) -> bool {
        let request = ControlRequest::new(variable, value);
        match self.client.send_control(&request).await {
            Ok(reply) => {
                tracing::debug!(%reply, "control sent");
                true
            }
            Err(err) => {
                tracing::debug!(error = ?err, "control request failed");
                self.display.show(CONNECTION_ERROR_MESSAGE);
                false
            }
        }
    }

    /// Mirror the current value of the control at `slot` into its label.
    /// Only ranged controls have one; for other kinds this does nothing.
    pub fn report_live_value(
        &self,
        surface: &impl ControlSurface,
        slot: usize,
        control: &ControlElement,
        current: &str,
    ) {
        if control.kind.mirrors_label() {
            surface.set_value_label(slot, current);
        }
    }
}
