use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::debug;

use crate::client::ApiClient;
use crate::logger::MessageLogger;
use crate::protocol::{encode_payload, DEVICE_MANUFACTURER, DEVICE_MODEL};
use crate::types::{DeviceInfo, OperationMode, ThermostatRecord, ZoneReading};
use crate::{Error, Result};

/// Last-known state for one zone plus its write operations.
///
/// State is unset until the first successful `refresh`. Mutators send a
/// full record and never touch local state; the next `refresh` is the only
/// way local fields reflect the controller's post-write state.
pub struct ZoneDevice {
    api: ApiClient,
    zone_id: u16,
    unique_id: String,
    name: String,
    state: Option<ZoneReading>,
    available: bool,
    unavailable_on_error: bool,
    logger: Option<Arc<Mutex<MessageLogger>>>,
}

impl ZoneDevice {
    pub fn new(http: reqwest::Client, base_url: &str, zone_id: u16) -> Self {
        Self {
            api: ApiClient::new(http, base_url, zone_id),
            zone_id,
            unique_id: format!("{base_url}-{zone_id}"),
            name: format!("Zone {zone_id}"),
            state: None,
            available: false,
            unavailable_on_error: false,
            logger: None,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.api = self.api.timeout(timeout);
        self
    }

    /// Flip availability to false when a refresh fails. Off by default:
    /// a failed refresh then only surfaces as the returned error, and the
    /// caller decides what to display.
    pub fn mark_unavailable_on_error(mut self, enabled: bool) -> Self {
        self.unavailable_on_error = enabled;
        self
    }

    pub(crate) fn message_logger(mut self, logger: Arc<Mutex<MessageLogger>>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Pull the latest state from the controller. On success all four
    /// fields are overwritten and the zone becomes available; on failure
    /// the error propagates.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.try_refresh().await {
            Ok(()) => Ok(()),
            Err(e) => {
                if self.unavailable_on_error {
                    self.available = false;
                }
                Err(e)
            }
        }
    }

    async fn try_refresh(&mut self) -> Result<()> {
        let record = self.api.get_zone_state().await?;
        let reading = ZoneReading::from_record(&record)?;
        if let Some(logger) = &self.logger
            && let Ok(mut logger) = logger.lock()
        {
            logger.log_read(self.zone_id, &record);
        }
        self.state = Some(reading);
        self.available = true;
        Ok(())
    }

    /// Full write record from current known state. The controller only
    /// accepts complete records, never partial patches.
    pub fn compose_record(&self) -> Result<ThermostatRecord> {
        match self.state {
            Some(reading) => Ok(reading.to_record()),
            None => Err(Error::StateUnknown(self.zone_id)),
        }
    }

    pub async fn turn_on(&self) -> Result<()> {
        let mut record = self.compose_record()?;
        record.power = 1;
        self.send_logged("turn_on", record).await
    }

    pub async fn turn_off(&self) -> Result<()> {
        let mut record = self.compose_record()?;
        record.power = 0;
        self.send_logged("turn_off", record).await
    }

    /// Setting a mode powers the zone on as a side effect.
    pub async fn set_mode(&self, mode: OperationMode) -> Result<()> {
        let mut record = self.compose_record()?;
        record.mode = mode.code();
        record.power = 1;
        self.send_logged("set_mode", record).await
    }

    pub async fn set_temperature(&self, target: f64) -> Result<()> {
        let mut record = self.compose_record()?;
        record.setpoint = target;
        self.send_logged("set_temperature", record).await
    }

    async fn send_logged(&self, action: &str, record: ThermostatRecord) -> Result<()> {
        let payload = encode_payload(&record)?;
        if let Some(logger) = &self.logger
            && let Ok(mut logger) = logger.lock()
        {
            logger.log_write(self.zone_id, action, &record);
        }
        debug!(zone = self.zone_id, action, "sending zone command");
        // The response is decoded to enforce the success contract but is
        // never applied to local state.
        self.api.set_zone_state(&payload).await?;
        Ok(())
    }

    // -- Read model --

    pub fn zone_id(&self) -> u16 {
        self.zone_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// True once the first refresh has succeeded.
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn reading(&self) -> Option<&ZoneReading> {
        self.state.as_ref()
    }

    pub fn operation_mode(&self) -> Option<OperationMode> {
        self.state.map(|s| s.mode)
    }

    pub fn power(&self) -> Option<bool> {
        self.state.map(|s| s.power)
    }

    pub fn room_temperature(&self) -> Option<f64> {
        self.state.map(|s| s.room_temperature)
    }

    pub fn target_temperature(&self) -> Option<f64> {
        self.state.map(|s| s.target_temperature)
    }

    pub fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            manufacturer: DEVICE_MANUFACTURER,
            model: DEVICE_MODEL,
            name: self.name.clone(),
        }
    }
}
