use crate::types::ThermostatRecord;
use crate::Result;

pub const DEVICE_MANUFACTURER: &str = "Mitsubishi Electric";
pub const DEVICE_MODEL: &str = "Melzone Building";

/// Per-zone real-time thermostat endpoint, shared by reads and writes.
pub fn thermostat_endpoint(base_url: &str, zone_id: u16) -> String {
    format!("{base_url}/Temps_Reel/Zone/{zone_id}/Thermostat.json")
}

/// Serialize a full-state record for a write. The Colibri parser rejects
/// any whitespace in the body; every field is numeric, so stripping is
/// lossless.
pub fn encode_payload(record: &ThermostatRecord) -> Result<String> {
    let body = serde_json::to_string(record)?;
    Ok(body.replace(' ', ""))
}

/// Decode a response body. The controller does not set a JSON content
/// type, so callers hand the raw text here regardless of headers.
pub fn parse_record(body: &str) -> Result<ThermostatRecord> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_path_exact() {
        assert_eq!(
            thermostat_endpoint("http://10.0.0.5", 0),
            "http://10.0.0.5/Temps_Reel/Zone/0/Thermostat.json"
        );
        for zone_id in 0..8 {
            assert_eq!(
                thermostat_endpoint("http://colibri.local", zone_id),
                format!("http://colibri.local/Temps_Reel/Zone/{zone_id}/Thermostat.json")
            );
        }
    }

    #[test]
    fn payload_has_no_whitespace() {
        let record = ThermostatRecord {
            mode: 0,
            temperature: 21.5,
            setpoint: 20.0,
            power: 1,
            fan: 0,
            window: 0,
            occupancy: 0,
        };
        let payload = encode_payload(&record).unwrap();
        assert!(!payload.bytes().any(|b| b.is_ascii_whitespace()), "{payload}");
    }

    #[test]
    fn payload_carries_all_seven_keys() {
        let record = ThermostatRecord {
            mode: 1,
            temperature: 19.0,
            setpoint: 22.5,
            power: 0,
            fan: 0,
            window: 0,
            occupancy: 0,
        };
        let payload = encode_payload(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        let obj = value.as_object().unwrap();
        for key in ["Mode", "Temperature", "Consigne", "Power", "Fan", "Window", "Occupancy"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 7);
    }

    #[test]
    fn parse_record_ignores_extra_keys() {
        let record = parse_record(
            r#"{"Mode":2,"Power":1,"Temperature":24.0,"Consigne":21.0,"Fan":0,"Window":0,"Occupancy":0,"Hyst":1}"#,
        )
        .unwrap();
        assert_eq!(record.mode, 2);
        assert_eq!(record.setpoint, 21.0);
    }

    #[test]
    fn parse_record_rejects_garbage() {
        assert!(parse_record("<html>busy</html>").is_err());
    }
}
