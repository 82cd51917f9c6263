//! Form controls and action buttons found in the served page.
//!
//! Every `<input>` or `<select>` carrying `data-value` is hydrated with it.
//! Only elements that name a device variable through `data-var` forward
//! their changes to the device. A ranged control mirrors its value into the
//! element with id `{id}-value`, or failing that into its next sibling
//! element.

use std::rc::Rc;

use campanel_app::ports::{ControlSurface, DeviceClient, StatusDisplay, UserPrompt};
use campanel_app::services::{ControlSynchronizer, SystemActions};
use campanel_domain::control::{ControlElement, ControlKind, ControlValue};
use campanel_domain::system::SystemAction;
use leptos::logging::warn;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

const CONTROL_SELECTOR: &str = "input[data-var], input[data-value], select[data-var], select[data-value]";

/// How one page element takes part in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    control: ControlElement,
    /// Whether user changes are sent to the device.
    forwards: bool,
}

/// Describe an element from its tag, `type` and attribute lookup.
///
/// Returns `None` for elements that are neither hydrated nor bound.
fn describe(
    tag_name: &str,
    input_type: Option<&str>,
    attribute: impl Fn(&str) -> Option<String>,
) -> Option<Slot> {
    let kind = ControlKind::classify(tag_name, input_type)?;
    let bound_variable = attribute("data-var").filter(|name| !name.is_empty());
    let initial = attribute("data-value");
    if bound_variable.is_none() && initial.is_none() {
        return None;
    }

    let forwards = bound_variable.is_some();
    let variable = bound_variable
        .or_else(|| attribute("name").filter(|name| !name.is_empty()))
        .or_else(|| attribute("id"))
        .unwrap_or_default();
    let mut control = ControlElement::new(variable, kind);
    if let Some(initial) = initial {
        control = control.with_initial(initial);
    }
    Some(Slot { control, forwards })
}

fn slot_of(element: &Element) -> Option<Slot> {
    let input_type = element
        .dyn_ref::<HtmlInputElement>()
        .map(HtmlInputElement::type_);
    describe(&element.tag_name(), input_type.as_deref(), |attr| {
        element.get_attribute(attr)
    })
}

/// Current value of an element, as it would be sent to the device.
fn live_value(kind: ControlKind, element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        if kind == ControlKind::Toggle {
            return ControlValue::Checked(input.checked()).wire_value().to_string();
        }
        return input.value();
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

fn listen(element: &Element, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(err) =
        element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        warn!("failed to add {event} listener: {err:?}");
        return;
    }
    // listeners live as long as the page
    closure.forget();
}

/// Every hydrated or bound control of the page, scanned once.
pub struct DomControls {
    document: Document,
    slots: Vec<(Slot, Element)>,
}

impl DomControls {
    pub fn scan(document: &Document) -> Self {
        let mut slots = Vec::new();
        if let Ok(nodes) = document.query_selector_all(CONTROL_SELECTOR) {
            for index in 0..nodes.length() {
                let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                if let Some(slot) = slot_of(&element) {
                    slots.push((slot, element));
                }
            }
        }
        Self {
            document: document.clone(),
            slots,
        }
    }

    fn element(&self, slot: usize) -> Option<&Element> {
        self.slots.get(slot).map(|(_, element)| element)
    }

    fn value_label(&self, element: &Element) -> Option<Element> {
        let by_id = Some(element.id())
            .filter(|id| !id.is_empty())
            .and_then(|id| self.document.get_element_by_id(&format!("{id}-value")));
        by_id.or_else(|| element.next_element_sibling())
    }
}

impl ControlSurface for DomControls {
    fn controls(&self) -> Vec<ControlElement> {
        self.slots.iter().map(|(slot, _)| slot.control.clone()).collect()
    }

    fn apply(&self, slot: usize, value: &ControlValue) {
        let Some(element) = self.element(slot) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            match value {
                ControlValue::Checked(checked) => input.set_checked(*checked),
                ControlValue::Text(text) => input.set_value(text),
            }
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value.wire_value());
        }
    }

    fn set_value_label(&self, slot: usize, text: &str) {
        if let Some(label) = self.element(slot).and_then(|e| self.value_label(e)) {
            label.set_text_content(Some(text));
        }
    }
}

/// Forward every committed change to the device and mirror live values of
/// ranged controls into their labels.
pub fn bind_controls<C, D>(surface: &Rc<DomControls>, sync: &Rc<ControlSynchronizer<C, D>>)
where
    C: DeviceClient + 'static,
    D: StatusDisplay + 'static,
{
    for (index, (slot, element)) in surface.slots.iter().enumerate() {
        let control = &slot.control;
        let kind = control.kind;

        if slot.forwards {
            let on_change = {
                let sync = Rc::clone(sync);
                let variable = control.variable.clone();
                let element = element.clone();
                move |_: web_sys::Event| {
                    let sync = Rc::clone(&sync);
                    let variable = variable.clone();
                    let value = live_value(kind, &element);
                    spawn_local(async move {
                        sync.set_control(&variable, &value).await;
                    });
                }
            };
            listen(element, "change", on_change);
        }

        if kind.mirrors_label() {
            let on_input = {
                let sync = Rc::clone(sync);
                let surface = Rc::clone(surface);
                let control = control.clone();
                let element = element.clone();
                move |_: web_sys::Event| {
                    let value = live_value(kind, &element);
                    sync.report_live_value(&*surface, index, &control, &value);
                }
            };
            listen(element, "input", on_input);
        }
    }
}

/// Wire the `data-action` buttons to their confirmed system actions.
pub fn bind_actions<C, P>(document: &Document, actions: &Rc<SystemActions<C, P>>)
where
    C: DeviceClient + 'static,
    P: UserPrompt + 'static,
{
    for (selector, action) in [
        (r#"[data-action="clear-settings"]"#, SystemAction::ClearSettings),
        (r#"[data-action="reboot"]"#, SystemAction::Reboot),
    ] {
        let Ok(Some(button)) = document.query_selector(selector) else {
            continue;
        };
        let actions = Rc::clone(actions);
        listen(&button, "click", move |_| {
            let actions = Rc::clone(&actions);
            spawn_local(async move {
                if let Err(err) = actions.perform(action).await {
                    warn!("{action} failed: {err}");
                }
            });
        });
    }
}
