//! Browser control panel served by the camera itself.
//!
//! Enhances the device's own HTML page: the status container gets a live
//! status line, form controls are hydrated and bound, and the system action
//! buttons ask for confirmation before doing anything.

use std::rc::Rc;

use campanel_app::services::{ControlSynchronizer, StatusPoller, SystemActions};
use leptos::logging::{log, warn};
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;

pub mod api;
mod dialogs;
mod dom;
mod status;
mod timer;

use api::GlooDeviceClient;
use dialogs::WindowPrompt;
use dom::DomControls;
use timer::GlooTimer;

/// Id of the element holding the status line.
const STATUS_CONTAINER: &str = "status";

/// Entry point: wire the page to the device and start polling.
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("no document to attach the control panel to");
        return;
    };
    let Some(container) = document
        .get_element_by_id(STATUS_CONTAINER)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        warn!("status container #{STATUS_CONTAINER} not found");
        return;
    };
    let display = status::mount_status_line(container);

    let surface = Rc::new(DomControls::scan(&document));
    let sync = Rc::new(ControlSynchronizer::new(GlooDeviceClient, display));
    let hydrated = sync.hydrate(&*surface);
    dom::bind_controls(&surface, &sync);
    log!("hydrated {hydrated} controls");

    let actions = Rc::new(SystemActions::new(GlooDeviceClient, WindowPrompt));
    dom::bind_actions(&document, &actions);

    spawn_local(StatusPoller::new(GlooDeviceClient, display, GlooTimer).run());
}
