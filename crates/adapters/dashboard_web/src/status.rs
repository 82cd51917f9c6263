//! Status line component and the display port that feeds it.

use campanel_app::ports::StatusDisplay;
use leptos::prelude::*;

/// Writes the status text into a signal rendered by [`StatusLine`].
#[derive(Clone, Copy)]
pub struct SignalDisplay {
    set_text: WriteSignal<String>,
}

impl SignalDisplay {
    pub fn new(set_text: WriteSignal<String>) -> Self {
        Self { set_text }
    }
}

impl StatusDisplay for SignalDisplay {
    fn show(&self, text: &str) {
        self.set_text.set(text.to_string());
    }
}

/// The single line of camera status text.
#[component]
pub fn StatusLine(text: ReadSignal<String>) -> impl IntoView {
    view! { <span class="status-line">{move || text.get()}</span> }
}

/// Mount a [`StatusLine`] inside `container`, keeping whatever text the
/// page put there until the first poll replaces it.
pub fn mount_status_line(container: web_sys::HtmlElement) -> SignalDisplay {
    let placeholder = container.text_content().unwrap_or_default();
    container.set_text_content(None);

    let (text, set_text) = signal(placeholder);
    leptos::mount::mount_to(container, move || view! { <StatusLine text=text/> }).forget();
    SignalDisplay::new(set_text)
}
