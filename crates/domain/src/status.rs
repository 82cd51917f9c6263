//! Status snapshot: the device health record served by `/status`.
//!
//! The camera firmware encodes every value as a JSON string (`"24.0"`) and
//! reports an unknown resolution as `"Unknown"`, while other builds send plain
//! numbers. Deserialization accepts both, and the status line shows a value
//! in the exact text the device sent it in.

use std::fmt;

use serde::Deserialize;

use crate::error::PanelError;

/// Text shown in place of the status line whenever a poll fails.
pub const CONNECTION_ERROR_MESSAGE: &str = "Status: Connection Error";

/// One status report from the device. Transient: rendered once and dropped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    #[serde(rename = "cameraFPS", deserialize_with = "reading::reported")]
    pub camera_fps: Reported<f64>,
    /// Size of the last frame, in kilobytes.
    #[serde(deserialize_with = "reading::reported")]
    pub frame_size: Reported<f64>,
    /// Number of connected stream clients.
    #[serde(deserialize_with = "reading::reported")]
    pub clients: Reported<u32>,
    /// Signal strength in dBm.
    #[serde(rename = "wifiRSSI", deserialize_with = "reading::reported")]
    pub wifi_rssi: Reported<i32>,
    #[serde(deserialize_with = "reading::reported")]
    pub wifi_channel: Reported<u32>,
    /// PHY mode as reported (e.g. `11n`, `802.11g`).
    #[serde(rename = "wifiPHY")]
    pub wifi_phy: String,
    #[serde(default, deserialize_with = "reading::dimension")]
    pub current_width: Option<u32>,
    #[serde(default, deserialize_with = "reading::dimension")]
    pub current_height: Option<u32>,

    /// Free heap, in kilobytes.
    #[serde(default, rename = "heap", deserialize_with = "reading::optional")]
    pub heap_kb: Option<u32>,
    /// Free PSRAM, in kilobytes.
    #[serde(default, rename = "psram", deserialize_with = "reading::optional")]
    pub psram_kb: Option<u32>,
    #[serde(default, rename = "uptime", deserialize_with = "reading::optional")]
    pub uptime_secs: Option<u64>,
    #[serde(default)]
    pub wifi_bandwidth: Option<String>,
    #[serde(default)]
    pub wifi_max_speed: Option<String>,
}

/// A numeric reading, remembered together with the text it arrived as.
///
/// Values sent as JSON strings display verbatim (`"24.0"` stays `24.0`);
/// values sent as JSON numbers display with their shortest form.
#[derive(Debug, Clone, PartialEq)]
pub struct Reported<T> {
    value: T,
    text: Option<String>,
}

impl<T: Copy> Reported<T> {
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }
}

impl<T> From<T> for Reported<T> {
    fn from(value: T) -> Self {
        Self { value, text: None }
    }
}

impl<T: fmt::Display> fmt::Display for Reported<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.text {
            Some(text) => f.write_str(text),
            None => fmt::Display::fmt(&self.value, f),
        }
    }
}

/// Known frame resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl StatusSnapshot {
    /// Parse a `/status` response body.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Malformed`] when the body is not JSON or a
    /// required field is missing or non-numeric.
    pub fn from_json(body: &str) -> Result<Self, PanelError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The resolution, only when the device reported both dimensions.
    #[must_use]
    pub fn resolution(&self) -> Option<Resolution> {
        match (self.current_width, self.current_height) {
            (Some(width), Some(height)) => Some(Resolution { width, height }),
            _ => None,
        }
    }

    /// Extra diagnostics not part of the status line, as label/value pairs.
    ///
    /// Only fields the device actually reported are included.
    #[must_use]
    pub fn diagnostics(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(heap) = self.heap_kb {
            out.push(("Free heap", format!("{heap}KB")));
        }
        if let Some(psram) = self.psram_kb {
            out.push(("Free PSRAM", format!("{psram}KB")));
        }
        if let Some(uptime) = self.uptime_secs {
            out.push(("Uptime", format_uptime(uptime)));
        }
        if let Some(bandwidth) = &self.wifi_bandwidth {
            out.push(("WiFi bandwidth", bandwidth.clone()));
        }
        if let Some(speed) = &self.wifi_max_speed {
            out.push(("WiFi max speed", speed.clone()));
        }
        out
    }
}

/// Renders the single-line summary shown in the status container.
impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Camera FPS: {} | Frame: {}KB | TCP: {} | WiFi: {}dBm Ch{} {}",
            self.camera_fps,
            self.frame_size,
            self.clients,
            self.wifi_rssi,
            self.wifi_channel,
            self.wifi_phy,
        )?;
        if let Some(resolution) = self.resolution() {
            write!(f, " | Resolution: {resolution}")?;
        }
        Ok(())
    }
}

fn format_uptime(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{hours}h {minutes:02}m {seconds:02}s")
}

/// Lenient field readers: a value may arrive as a number or as its text form.
mod reading {
    use std::str::FromStr;

    use serde::de::{self, Deserializer};
    use serde::Deserialize;

    use super::Reported;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Reading<T> {
        Number(T),
        Text(String),
    }

    impl<T: FromStr> Reading<T> {
        fn into_value(self) -> Option<T> {
            match self {
                Self::Number(value) => Some(value),
                Self::Text(text) => text.trim().parse().ok(),
            }
        }
    }

    pub(super) fn reported<'de, D, T>(deserializer: D) -> Result<Reported<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
    {
        match Reading::<T>::deserialize(deserializer)? {
            Reading::Number(value) => Ok(Reported::from(value)),
            Reading::Text(text) => match text.trim().parse() {
                Ok(value) => Ok(Reported {
                    value,
                    text: Some(text),
                }),
                Err(_) => Err(de::Error::custom("expected a number or numeric string")),
            },
        }
    }

    pub(super) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
    {
        Ok(Option::<Reading<T>>::deserialize(deserializer)?.and_then(Reading::into_value))
    }

    /// Like [`optional`], but a zero dimension also means "unknown".
    pub(super) fn dimension<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional::<D, u32>(deserializer)?.filter(|value| *value > 0))
    }
}
