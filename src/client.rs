use std::time::Duration;

use serde_json::Value;
use tracing::{debug, trace};

use crate::protocol::{parse_record, thermostat_endpoint};
use crate::types::ThermostatRecord;
use crate::{Error, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Stateless transport for one zone's thermostat endpoint.
///
/// Holds a clone of the shared `reqwest::Client` (the session is owned by
/// the caller and reference counted internally, so one session serves all
/// zones). Each call is a single round trip; no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: &str, zone_id: u16) -> Self {
        Self {
            http,
            endpoint: thermostat_endpoint(base_url, zone_id),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Read the zone's current thermostat record.
    ///
    /// Succeeds only on HTTP 200. The body is parsed as JSON regardless of
    /// the declared content type (the controller replies without one).
    pub async fn get_zone_state(&self) -> Result<ThermostatRecord> {
        debug!(url = %self.endpoint, "reading zone state");
        let resp = self
            .http
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await?;
        let status = resp.status().as_u16();
        if status != 200 {
            return Err(Error::Status(status));
        }
        let body = resp.text().await?;
        let record = parse_record(&body)?;
        trace!(?record, "zone state");
        Ok(record)
    }

    /// Write a pre-encoded full-state payload. Same contract as the read:
    /// 200 plus a JSON body, or an error. Returns the decoded response.
    pub async fn set_zone_state(&self, payload: &str) -> Result<Value> {
        debug!(url = %self.endpoint, payload, "writing zone state");
        let resp = self
            .http
            .post(&self.endpoint)
            .timeout(self.timeout)
            .body(payload.to_owned())
            .send()
            .await?;
        let status = resp.status().as_u16();
        if status != 200 {
            return Err(Error::Status(status));
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
