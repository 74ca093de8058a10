use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Vendor-defined climate mode codes. Not extensible; anything outside
/// 0..=2 fails normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    Auto,
    Heat,
    Cool,
}

impl OperationMode {
    pub fn code(&self) -> u8 {
        match self {
            OperationMode::Auto => 0,
            OperationMode::Heat => 1,
            OperationMode::Cool => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(OperationMode::Auto),
            1 => Some(OperationMode::Heat),
            2 => Some(OperationMode::Cool),
            _ => None,
        }
    }
}

/// The exact wire shape of `Thermostat.json`, both directions.
///
/// `Fan`, `Window` and `Occupancy` are required by the write schema but
/// unused by this client; they are always written as 0 and defaulted on
/// read in case the controller omits them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermostatRecord {
    #[serde(rename = "Mode")]
    pub mode: u8,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Consigne")]
    pub setpoint: f64,
    #[serde(rename = "Power")]
    pub power: u8,
    #[serde(rename = "Fan", default)]
    pub fan: u8,
    #[serde(rename = "Window", default)]
    pub window: u8,
    #[serde(rename = "Occupancy", default)]
    pub occupancy: u8,
}

/// Normalized read model for one zone. `mode` is only meaningful while
/// `power` is true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneReading {
    pub mode: OperationMode,
    pub power: bool,
    pub room_temperature: f64,
    pub target_temperature: f64,
}

impl ZoneReading {
    pub fn from_record(record: &ThermostatRecord) -> Result<Self> {
        let mode = OperationMode::from_code(record.mode).ok_or(Error::InvalidMode(record.mode))?;
        Ok(Self {
            mode,
            power: record.power == 1,
            room_temperature: record.temperature,
            target_temperature: record.setpoint,
        })
    }

    /// Full write record from this reading, with the always-zero fields.
    pub fn to_record(&self) -> ThermostatRecord {
        ThermostatRecord {
            mode: self.mode.code(),
            temperature: self.room_temperature,
            setpoint: self.target_temperature,
            power: if self.power { 1 } else { 0 },
            fan: 0,
            window: 0,
            occupancy: 0,
        }
    }
}

/// Static metadata for a zone, as shown in a host's device registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub manufacturer: &'static str,
    pub model: &'static str,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_code_roundtrip() {
        for mode in [OperationMode::Auto, OperationMode::Heat, OperationMode::Cool] {
            assert_eq!(OperationMode::from_code(mode.code()), Some(mode));
        }
    }

    #[test]
    fn mode_codes_match_vendor_table() {
        assert_eq!(OperationMode::Auto.code(), 0);
        assert_eq!(OperationMode::Heat.code(), 1);
        assert_eq!(OperationMode::Cool.code(), 2);
        assert_eq!(OperationMode::from_code(3), None);
    }

    #[test]
    fn reading_from_record() {
        let record = ThermostatRecord {
            mode: 1,
            temperature: 21.5,
            setpoint: 22.0,
            power: 1,
            fan: 0,
            window: 0,
            occupancy: 0,
        };
        let reading = ZoneReading::from_record(&record).unwrap();
        assert_eq!(reading.mode, OperationMode::Heat);
        assert!(reading.power);
        assert_eq!(reading.room_temperature, 21.5);
        assert_eq!(reading.target_temperature, 22.0);
    }

    #[test]
    fn reading_rejects_unknown_mode() {
        let record = ThermostatRecord {
            mode: 7,
            temperature: 20.0,
            setpoint: 20.0,
            power: 1,
            fan: 0,
            window: 0,
            occupancy: 0,
        };
        let err = ZoneReading::from_record(&record).unwrap_err();
        assert!(matches!(err, Error::InvalidMode(7)));
    }

    #[test]
    fn reading_power_derived_from_one() {
        let mut record = ThermostatRecord {
            mode: 0,
            temperature: 20.0,
            setpoint: 20.0,
            power: 1,
            fan: 0,
            window: 0,
            occupancy: 0,
        };
        assert!(ZoneReading::from_record(&record).unwrap().power);
        record.power = 0;
        assert!(!ZoneReading::from_record(&record).unwrap().power);
    }

    #[test]
    fn to_record_zeroes_fixed_fields() {
        let reading = ZoneReading {
            mode: OperationMode::Cool,
            power: true,
            room_temperature: 23.0,
            target_temperature: 21.0,
        };
        let record = reading.to_record();
        assert_eq!(record.mode, 2);
        assert_eq!(record.power, 1);
        assert_eq!(record.fan, 0);
        assert_eq!(record.window, 0);
        assert_eq!(record.occupancy, 0);
    }

    #[test]
    fn record_decodes_without_fixed_fields() {
        let record: ThermostatRecord =
            serde_json::from_str(r#"{"Mode":1,"Power":1,"Temperature":21.5,"Consigne":22.0}"#)
                .unwrap();
        assert_eq!(record.fan, 0);
        assert_eq!(record.window, 0);
        assert_eq!(record.occupancy, 0);
    }
}
