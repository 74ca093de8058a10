use std::fs::{File, OpenOptions};
use std::io::Write;

use chrono::Utc;
use serde_json::{json, Value};
use tracing::warn;

use crate::types::ThermostatRecord;

pub enum MessageLogMode {
    /// Every exchange, reads included.
    Full,
    /// Commands only.
    WritesOnly,
}

/// NDJSON log of controller exchanges, one line per request.
pub(crate) struct MessageLogger {
    mode: MessageLogMode,
    file: File,
}

impl MessageLogger {
    pub fn new(mode: MessageLogMode, path: &str) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { mode, file })
    }

    pub fn log_read(&mut self, zone: u16, record: &ThermostatRecord) {
        if matches!(self.mode, MessageLogMode::WritesOnly) {
            return;
        }
        let entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "dir": "read",
            "zone": zone,
            "body": record,
        });
        self.write_line(&entry);
    }

    pub fn log_write(&mut self, zone: u16, action: &str, record: &ThermostatRecord) {
        let entry = json!({
            "ts": Utc::now().to_rfc3339(),
            "dir": "write",
            "zone": zone,
            "action": action,
            "body": record,
        });
        self.write_line(&entry);
    }

    fn write_line(&mut self, entry: &Value) {
        if let Ok(line) = serde_json::to_string(entry)
            && let Err(e) = writeln!(self.file, "{line}")
        {
            warn!("failed to write log entry: {e}");
        }
    }
}
