//! Blocking `confirm()` / `alert()` dialogs.

use campanel_app::ports::UserPrompt;
use leptos::logging::warn;

/// Unwrap a dialog result, logging a failure and falling back to the
/// default (`false` for a confirmation, nothing for an alert).
fn settle<T: Default>(dialog: &str, result: Result<T, String>) -> T {
    result.unwrap_or_else(|err| {
        warn!("{dialog} dialog failed: {err}");
        T::default()
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WindowPrompt;

impl UserPrompt for WindowPrompt {
    fn confirm(&self, message: &str) -> bool {
        let answer = web_sys::window()
            .ok_or_else(|| "no window".to_string())
            .and_then(|w| {
                w.confirm_with_message(message)
                    .map_err(|err| format!("{err:?}"))
            });
        settle("confirm", answer)
    }

    fn acknowledge(&self, message: &str) {
        let shown = web_sys::window()
            .ok_or_else(|| "no window".to_string())
            .and_then(|w| w.alert_with_message(message).map_err(|err| format!("{err:?}")));
        settle("alert", shown);
    }
}
