//! System actions: confirmed, destructive device operations.

use campanel_domain::error::PanelError;
use campanel_domain::system::{ActionOutcome, SystemAction};

use crate::ports::{DeviceClient, UserPrompt};

/// Clear-settings and reboot, each gated behind a confirmation.
pub struct SystemActions<C, P> {
    client: C,
    prompt: P,
}

impl<C, P> SystemActions<C, P>
where
    C: DeviceClient,
    P: UserPrompt,
{
    pub fn new(client: C, prompt: P) -> Self {
        Self { client, prompt }
    }

    /// Ask for confirmation, then wipe the device's stored settings.
    ///
    /// # Errors
    ///
    /// See [`perform`](Self::perform).
    pub async fn clear_settings(&self) -> Result<ActionOutcome, PanelError> {
        self.perform(SystemAction::ClearSettings).await
    }

    /// Ask for confirmation, then reboot the camera.
    ///
    /// # Errors
    ///
    /// See [`perform`](Self::perform).
    pub async fn reboot(&self) -> Result<ActionOutcome, PanelError> {
        self.perform(SystemAction::Reboot).await
    }

    /// Confirm, send one request, and show the device's reply verbatim.
    ///
    /// Declining sends nothing. A failed request shows nothing to the user.
    ///
    /// # Errors
    ///
    /// Returns the [`PanelError`] of the request when the device could not
    /// be reached.
    #[tracing::instrument(skip(self))]
    pub async fn perform(&self, action: SystemAction) -> Result<ActionOutcome, PanelError> {
        if !self.prompt.confirm(action.confirmation_prompt()) {
            tracing::debug!("declined");
            return Ok(ActionOutcome::Declined);
        }

        let reply = self.client.trigger(action).await.inspect_err(|err| {
            tracing::warn!(error = ?err, "system action failed");
        })?;
        self.prompt.acknowledge(&reply);
        Ok(ActionOutcome::Completed { reply })
    }
}
