use std::env;

use fleet::{ingest, FleetRecord, FleetResponse, Response};

// One malformed location and one duplicate id, to show both being skipped.
const SAMPLE_FEED: &str = r#"{
    "data": {
        "vehicles": [
            {
                "vehicle_id": "scooter-17",
                "vehicle_type": "E-Scooter",
                "available": true,
                "location": "POINT(10.1344 54.3214)",
                "battery_level": 87,
                "last_reported": "2024-07-01T11:58:21Z"
            },
            {
                "vehicle_id": "bike-04",
                "vehicle_type": "Electric Bike",
                "available": true,
                "location": "POINT(10.1402 54.3239)",
                "battery_level": 64,
                "last_reported": "2024-07-01T11:59:02Z"
            },
            {
                "vehicle_id": "car-11",
                "vehicle_type": "Carsharing",
                "available": false,
                "location": "POINT(10.1197 54.3175)",
                "last_reported": "2024-07-01T11:57:45Z"
            },
            {
                "vehicle_id": "auto-02",
                "vehicle_type": "Auto",
                "available": true,
                "location": "POINT(77.5946 12.9716)"
            },
            {
                "vehicle_id": "bike-09",
                "vehicle_type": "Bike",
                "available": true,
                "location": "POINT(10.1290,54.3201)"
            },
            {
                "vehicle_id": "scooter-17",
                "vehicle_type": "E-Scooter",
                "available": false,
                "location": "POINT(10.1350 54.3216)"
            }
        ]
    }
}"#;

fn viewer_position() -> Option<(f64, f64)> {
    let latitude = env::var("VIEWER_LATITUDE").ok()?.parse().ok()?;
    let longitude = env::var("VIEWER_LONGITUDE").ok()?.parse().ok()?;
    Some((latitude, longitude))
}

fn main() {
    env_logger::init();

    let response: Response<FleetResponse<FleetRecord>> =
        serde_json::from_str(SAMPLE_FEED).unwrap();
    let vehicles = ingest::map_ready_vehicles(response.data.vehicles);
    log::info!("chip badges: {:?}", ingest::count_by_category(&vehicles));

    let category = env::var("CATEGORY").unwrap_or_else(|_| "All".to_owned());
    let filtered = ingest::filter_by_label(vehicles, &category);

    let markers = match viewer_position() {
        Some((latitude, longitude)) => {
            ingest::nearest_first(filtered, latitude, longitude)
                .into_iter()
                .map(|entry| {
                    serde_json::json!({
                        "marker": entry.content.classify(),
                        "vehicle": entry,
                    })
                })
                .collect::<Vec<_>>()
        }
        None => filtered
            .into_iter()
            .map(|vehicle| {
                serde_json::json!({
                    "marker": vehicle.classify(),
                    "vehicle": vehicle,
                })
            })
            .collect::<Vec<_>>(),
    };

    let json = serde_json::to_string_pretty(&markers).unwrap();
    println!("markers: {}", json);
}
