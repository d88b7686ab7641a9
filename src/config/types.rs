use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::dashboard::SessionLimits;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DashboardConfig {
    pub dataset: Option<DatasetConfig>,
    pub server: Option<ServerConfig>,
    pub slider: Option<SliderConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DatasetConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Upper bound on concurrently open dashboard sessions.
    pub max_sessions: Option<usize>,
    /// Seconds of inactivity after which a session is dropped.
    pub session_ttl_secs: Option<u64>,
}

/// Payload slider layout. Independent of the dataset bounds, which only set
/// the slider's initial value. Fields left out take their default.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10000.0,
            step: 1000.0,
            marks: vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0],
        }
    }
}

impl DashboardConfig {
    pub fn dataset_path(&self) -> Option<&str> {
        self.dataset.as_ref().and_then(|d| d.path.as_deref())
    }

    pub fn host(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.host.as_deref())
    }

    pub fn port(&self) -> Option<u16> {
        self.server.as_ref().and_then(|s| s.port)
    }

    pub fn slider(&self) -> SliderConfig {
        self.slider.clone().unwrap_or_default()
    }

    pub fn session_limits(&self) -> SessionLimits {
        let defaults = SessionLimits::default();
        let server = self.server.as_ref();
        SessionLimits {
            max_sessions: server.and_then(|s| s.max_sessions).unwrap_or(defaults.max_sessions),
            idle_ttl: server
                .and_then(|s| s.session_ttl_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.idle_ttl),
        }
    }
}
