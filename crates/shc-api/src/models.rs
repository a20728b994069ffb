// Controller resource records
//
// Shapes returned by the `/smarthome/*` endpoints. Only `id` is required;
// every other field uses `#[serde(default)]` because the controller omits
// fields that do not apply to a given device family or firmware revision.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Device ───────────────────────────────────────────────────────────

/// Reachability reported by the controller for a device.
///
/// Values other than `AVAILABLE` / `UNAVAILABLE` are kept verbatim so they
/// survive a decode/encode cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceStatus {
    Available,
    Unavailable,
    Other(String),
}

impl DeviceStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "AVAILABLE",
            Self::Unavailable => "UNAVAILABLE",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl Default for DeviceStatus {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for DeviceStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "AVAILABLE" => Self::Available,
            "UNAVAILABLE" => Self::Unavailable,
            _ => Self::Other(raw),
        }
    }
}

impl From<DeviceStatus> for String {
    fn from(status: DeviceStatus) -> Self {
        match status {
            DeviceStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device object from `/smarthome/devices`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(rename = "@type", default)]
    pub device_type: String,
    pub id: String,
    #[serde(default)]
    pub root_device_id: String,
    #[serde(default)]
    pub device_service_ids: Vec<String>,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub device_model: String,
    #[serde(default)]
    pub serial: String,
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: DeviceStatus,
}

// ── Room ─────────────────────────────────────────────────────────────

/// Room object from `/smarthome/rooms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(rename = "@type", default)]
    pub room_type: String,
    pub id: String,
    #[serde(default)]
    pub icon_id: String,
    #[serde(default)]
    pub name: String,
}

// ── Scenario ─────────────────────────────────────────────────────────

/// Scenario object from `/smarthome/scenarios`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    #[serde(rename = "@type", default)]
    pub scenario_type: String,
    pub id: String,
    #[serde(default)]
    pub icon_id: String,
    #[serde(default)]
    pub name: String,
    /// Controller-defined steps, in execution order. Not interpreted here.
    #[serde(default)]
    pub actions: Vec<serde_json::Value>,
}

// ── Message ──────────────────────────────────────────────────────────

/// Status/event message from `/smarthome/messages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "@type", default)]
    pub message_type: String,
    pub id: String,
    /// Everything else the controller attached (code, arguments, timestamps).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Error body ───────────────────────────────────────────────────────

/// Body of any non-success response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[serde(rename = "@type", default)]
    pub error_type: String,
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub status_code: u16,
}
