//! In-memory port implementations shared by the service tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};
use std::time::Duration;

use campanel_domain::control::{ControlElement, ControlValue};
use campanel_domain::endpoint::{ControlRequest, Endpoint};
use campanel_domain::error::PanelError;
use campanel_domain::status::StatusSnapshot;
use campanel_domain::system::SystemAction;

use crate::ports::{ControlSurface, DeviceClient, StatusDisplay, Timer, UserPrompt};

pub fn sample_status() -> StatusSnapshot {
    status_with(24.0, 18.0, 2, -61, 6, "11n")
}

pub fn status_with(
    camera_fps: f64,
    frame_size: f64,
    clients: u32,
    wifi_rssi: i32,
    wifi_channel: u32,
    wifi_phy: &str,
) -> StatusSnapshot {
    StatusSnapshot {
        camera_fps: camera_fps.into(),
        frame_size: frame_size.into(),
        clients: clients.into(),
        wifi_rssi: wifi_rssi.into(),
        wifi_channel: wifi_channel.into(),
        wifi_phy: wifi_phy.to_string(),
        current_width: None,
        current_height: None,
        heap_kb: None,
        psram_kb: None,
        uptime_secs: None,
        wifi_bandwidth: None,
        wifi_max_speed: None,
    }
}

pub fn unreachable() -> PanelError {
    PanelError::Transport(Box::new(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused",
    )))
}

pub fn malformed() -> PanelError {
    PanelError::Malformed(Box::new(std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        "not json",
    )))
}

/// Scripted device: answers status polls from a queue and records every
/// request path it receives.
#[derive(Clone, Default)]
pub struct FakeDevice {
    statuses: Rc<RefCell<VecDeque<Result<StatusSnapshot, PanelError>>>>,
    offline: Rc<Cell<bool>>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl FakeDevice {
    pub fn push_status(&self, status: Result<StatusSnapshot, PanelError>) {
        self.statuses.borrow_mut().push_back(status);
    }

    /// Make every control and system request fail at the transport level.
    pub fn go_offline(&self) {
        self.offline.set(true);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn record(&self, endpoint: &Endpoint) -> Result<(), PanelError> {
        self.requests.borrow_mut().push(endpoint.path_and_query());
        if self.offline.get() {
            return Err(unreachable());
        }
        Ok(())
    }
}

impl DeviceClient for FakeDevice {
    async fn fetch_status(&self) -> Result<StatusSnapshot, PanelError> {
        self.requests
            .borrow_mut()
            .push(Endpoint::Status.path_and_query());
        self.statuses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unreachable()))
    }

    async fn send_control(&self, request: &ControlRequest) -> Result<String, PanelError> {
        self.record(&Endpoint::Control(request.clone()))?;
        Ok("OK".to_string())
    }

    async fn trigger(&self, action: SystemAction) -> Result<String, PanelError> {
        self.record(&Endpoint::System(action))?;
        Ok(match action {
            SystemAction::ClearSettings => {
                "Camera settings reset. Please reboot to apply defaults.".to_string()
            }
            SystemAction::Reboot => "Rebooting...".to_string(),
        })
    }
}

/// Display that keeps every text it was asked to show.
#[derive(Clone, Default)]
pub struct RecordingDisplay {
    shown: Rc<RefCell<Vec<String>>>,
}

impl RecordingDisplay {
    pub fn shown(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.shown.borrow().last().cloned()
    }
}

impl StatusDisplay for RecordingDisplay {
    fn show(&self, text: &str) {
        self.shown.borrow_mut().push(text.to_string());
    }
}

/// Timer whose handles complete on first poll. Tracks how many handles are
/// alive and how many were dropped before firing.
#[derive(Clone, Default)]
pub struct FakeTimer {
    scheduled: Rc<RefCell<Vec<Duration>>>,
    live: Rc<Cell<usize>>,
    cancelled: Rc<Cell<usize>>,
}

impl FakeTimer {
    pub fn scheduled(&self) -> Vec<Duration> {
        self.scheduled.borrow().clone()
    }

    pub fn live(&self) -> usize {
        self.live.get()
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled.get()
    }
}

pub struct FakeHandle {
    live: Rc<Cell<usize>>,
    cancelled: Rc<Cell<usize>>,
    fired: bool,
}

impl Future for FakeHandle {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<()> {
        self.fired = true;
        Poll::Ready(())
    }
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
        if !self.fired {
            self.cancelled.set(self.cancelled.get() + 1);
        }
    }
}

impl Timer for FakeTimer {
    type Handle = FakeHandle;

    fn schedule(&self, delay: Duration) -> FakeHandle {
        self.scheduled.borrow_mut().push(delay);
        self.live.set(self.live.get() + 1);
        FakeHandle {
            live: Rc::clone(&self.live),
            cancelled: Rc::clone(&self.cancelled),
            fired: false,
        }
    }
}

/// Control surface backed by a list of elements; records every write by slot.
#[derive(Default)]
pub struct FakeSurface {
    pub elements: Vec<ControlElement>,
    pub applied: RefCell<Vec<(usize, ControlValue)>>,
    pub labels: RefCell<Vec<(usize, String)>>,
}

impl FakeSurface {
    pub fn with(elements: Vec<ControlElement>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }
}

impl ControlSurface for FakeSurface {
    fn controls(&self) -> Vec<ControlElement> {
        self.elements.clone()
    }

    fn apply(&self, slot: usize, value: &ControlValue) {
        self.applied.borrow_mut().push((slot, value.clone()));
    }

    fn set_value_label(&self, slot: usize, text: &str) {
        self.labels.borrow_mut().push((slot, text.to_string()));
    }
}

/// Prompt with a fixed answer; records questions and acknowledgements.
pub struct ScriptedPrompt {
    answer: bool,
    pub questions: RefCell<Vec<String>>,
    pub acknowledged: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            questions: RefCell::new(Vec::new()),
            acknowledged: RefCell::new(Vec::new()),
        }
    }
}

impl UserPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.questions.borrow_mut().push(message.to_string());
        self.answer
    }

    fn acknowledge(&self, message: &str) {
        self.acknowledged.borrow_mut().push(message.to_string());
    }
}
