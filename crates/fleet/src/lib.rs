use chrono::{DateTime, Utc};
use serde::Deserialize;

pub mod ingest;

/// A single vehicle exactly as the fleet query service returns it. Fields
/// this core does not consume are ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct FleetRecord {
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub available: bool,
    /// WKT point, longitude first: `POINT(<lon> <lat>)`.
    pub location: String,
    pub battery_level: Option<u8>,
    pub last_reported: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FleetResponse<T> {
    pub vehicles: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Response<T> {
    pub data: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_feed_envelope() {
        let body = r#"{
            "data": {
                "vehicles": [
                    {
                        "vehicle_id": "v-1",
                        "vehicle_type": "E-Scooter",
                        "available": true,
                        "location": "POINT(10.1228 54.3233)",
                        "battery_level": 87,
                        "last_reported": "2024-07-01T12:00:00Z",
                        "fleet_zone": "kiel-center"
                    }
                ]
            }
        }"#;
        let response: Response<FleetResponse<FleetRecord>> =
            serde_json::from_str(body).unwrap();
        let record = &response.data.vehicles[0];
        assert_eq!(record.vehicle_id, "v-1");
        assert!(record.available);
        assert_eq!(record.battery_level, Some(87));
        assert_eq!(record.location, "POINT(10.1228 54.3233)");
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let body = r#"{
            "vehicle_id": "v-2",
            "vehicle_type": "Auto",
            "available": false,
            "location": "POINT(77.5946 12.9716)"
        }"#;
        let record: FleetRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.battery_level, None);
        assert_eq!(record.last_reported, None);
    }
}
