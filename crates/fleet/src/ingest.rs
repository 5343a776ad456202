use indexmap::IndexMap;
use itertools::Itertools;
use model::{
    category::{self, Category},
    vehicle::Vehicle,
    WithDistance,
};
use utility::wkt;

use crate::FleetRecord;

/// Turns raw feed records into map-ready vehicles. A record with a malformed
/// location is skipped with a warning; one bad record never aborts the batch.
/// Duplicate vehicle ids keep their first occurrence.
pub fn map_ready_vehicles(records: Vec<FleetRecord>) -> Vec<Vehicle> {
    let total = records.len();
    let vehicles = records
        .into_iter()
        .unique_by(|record| record.vehicle_id.clone())
        .filter_map(|record| match wkt::parse_point(&record.location) {
            Ok(position) => Some(Vehicle {
                vehicle_id: record.vehicle_id,
                vehicle_type: record.vehicle_type,
                available: record.available,
                latitude: position.latitude,
                longitude: position.longitude,
                battery_level: record.battery_level,
                last_reported: record.last_reported,
            }),
            Err(why) => {
                log::warn!("skipping vehicle {}: {}", record.vehicle_id, why);
                None
            }
        })
        .collect::<Vec<_>>();
    log::info!("ingested {} of {} fleet records", vehicles.len(), total);
    vehicles
}

/// Annotates each vehicle with the whole-meter distance to the viewer and
/// sorts nearest first. Callers without viewer coordinates skip this step.
pub fn nearest_first(
    fleet: Vec<Vehicle>,
    latitude: f64,
    longitude: f64,
) -> Vec<WithDistance<Vehicle>> {
    let mut annotated = fleet
        .into_iter()
        .map(|vehicle| vehicle.with_distance_to(latitude, longitude))
        .collect::<Vec<_>>();
    annotated.sort_by_key(|entry| entry.distance_m);
    annotated
}

/// Filters by the raw label the UI sends. An unknown label yields an empty
/// result, as before, but is logged so a typo does not pass for an empty
/// category.
pub fn filter_by_label(fleet: Vec<Vehicle>, label: &str) -> Vec<Vehicle> {
    match Category::from_label(label) {
        Ok(selected) => category::filter_by_category(fleet, selected),
        Err(why) => {
            log::warn!("{}, showing no vehicles", why);
            Vec::new()
        }
    }
}

/// Per-category totals for the filter chip badges, in chip order.
pub fn count_by_category(fleet: &[Vehicle]) -> IndexMap<Category, usize> {
    Category::ALL
        .into_iter()
        .map(|selected| {
            let count = fleet
                .iter()
                .filter(|vehicle| selected.matches(vehicle))
                .count();
            (selected, count)
        })
        .collect()
}
