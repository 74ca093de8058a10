use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::client::DEFAULT_TIMEOUT;
use crate::device::ZoneDevice;
use crate::logger::{MessageLogMode, MessageLogger};
use crate::Result;

pub struct ColibriControllerBuilder {
    base_url: String,
    zone_count: u16,
    timeout: Duration,
    http: Option<reqwest::Client>,
    log_mode: Option<MessageLogMode>,
    log_path: Option<String>,
    unavailable_on_error: bool,
}

impl ColibriControllerBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            zone_count: 1,
            timeout: DEFAULT_TIMEOUT,
            http: None,
            log_mode: None,
            log_path: None,
            unavailable_on_error: false,
        }
    }

    /// One device per zone index in `[0, count)`.
    pub fn zone_count(mut self, count: u16) -> Self {
        self.zone_count = count;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Inject a shared HTTP session. One is built internally otherwise.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn message_log(mut self, mode: MessageLogMode, path: impl Into<String>) -> Self {
        self.log_mode = Some(mode);
        self.log_path = Some(path.into());
        self
    }

    pub fn mark_unavailable_on_error(mut self, enabled: bool) -> Self {
        self.unavailable_on_error = enabled;
        self
    }

    pub fn build(self) -> ColibriController {
        let http = self.http.unwrap_or_else(|| {
            reqwest::Client::builder()
                .build()
                .expect("failed to build HTTP client")
        });

        let logger = match (self.log_mode, self.log_path) {
            (Some(mode), Some(path)) => Some(Arc::new(Mutex::new(
                MessageLogger::new(mode, &path).expect("failed to open message log"),
            ))),
            _ => None,
        };

        let devices = (0..self.zone_count)
            .map(|zone_id| {
                let mut device = ZoneDevice::new(http.clone(), &self.base_url, zone_id)
                    .timeout(self.timeout)
                    .mark_unavailable_on_error(self.unavailable_on_error);
                if let Some(logger) = &logger {
                    device = device.message_logger(logger.clone());
                }
                device
            })
            .collect();

        ColibriController {
            base_url: self.base_url,
            devices,
        }
    }
}

/// Explicit registry of zone devices over one shared HTTP session.
///
/// Owned by whatever orchestrates polling: construct on setup, drop on
/// teardown. Zones are independent; the host may drive them concurrently,
/// but must not race a refresh against a mutator on the same zone if it
/// wants a deterministic result.
pub struct ColibriController {
    base_url: String,
    devices: Vec<ZoneDevice>,
}

impl ColibriController {
    pub fn builder(base_url: impl Into<String>) -> ColibriControllerBuilder {
        ColibriControllerBuilder::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn zones(&self) -> &[ZoneDevice] {
        &self.devices
    }

    pub fn zones_mut(&mut self) -> &mut [ZoneDevice] {
        &mut self.devices
    }

    pub fn zone(&self, zone_id: u16) -> Option<&ZoneDevice> {
        self.devices.iter().find(|d| d.zone_id() == zone_id)
    }

    pub fn zone_mut(&mut self, zone_id: u16) -> Option<&mut ZoneDevice> {
        self.devices.iter_mut().find(|d| d.zone_id() == zone_id)
    }

    /// Refresh every zone in index order, stopping at the first failure.
    pub async fn refresh_all(&mut self) -> Result<()> {
        for device in &mut self.devices {
            device.refresh().await?;
        }
        Ok(())
    }
}
