use std::borrow::Cow;

use chrono::{DateTime, Utc};
use schemars::{
    gen::SchemaGenerator,
    schema::{InstanceType, Schema, SchemaObject},
    JsonSchema,
};
use serde::{Deserialize, Serialize};
use utility::geo;

use crate::WithDistance;

/// A single shared-mobility vehicle, ready for the map surface.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub vehicle_id: String,
    pub vehicle_type: String,
    pub available: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub battery_level: Option<u8>,
    pub last_reported: Option<DateTime<Utc>>,
}

impl Vehicle {
    /// Derives the marker presentation. Recomputed on every call; callers
    /// that want caching do it themselves.
    pub fn classify(&self) -> Classification {
        let kind = self.vehicle_type.to_lowercase();
        let icon = ICON_RULES
            .iter()
            .find(|(pattern, _)| kind.contains(*pattern))
            .map(|(_, icon)| *icon)
            .unwrap_or(VehicleIcon::AutoRickshaw);
        let color = if self.available {
            MarkerColor::Available
        } else {
            MarkerColor::Unavailable
        };
        Classification { icon, color }
    }

    pub fn with_distance_to(
        self,
        latitude: f64,
        longitude: f64,
    ) -> WithDistance<Self> {
        let distance = geo::distance_meters(
            latitude,
            longitude,
            self.latitude,
            self.longitude,
        );
        WithDistance::new(distance, self)
    }
}

/// First match wins. Kept as a slice: some type vocabularies contain more
/// than one of these substrings, and the rule order decides the tie.
const ICON_RULES: &[(&str, VehicleIcon)] = &[
    ("bike", VehicleIcon::Bicycle),
    ("scooter", VehicleIcon::Scooter),
    ("car", VehicleIcon::Car),
];

#[derive(Debug, Clone, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub icon: VehicleIcon,
    pub color: MarkerColor,
}

/// Marker glyph, serialized under its icon-font name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleIcon {
    Bicycle,
    Scooter,
    Car,
    AutoRickshaw,
}

/// Marker tint. Exactly two outcomes; there is no unknown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Available,
    Unavailable,
}

impl MarkerColor {
    pub fn hex(&self) -> &'static str {
        match self {
            MarkerColor::Available => "#4caf50",
            MarkerColor::Unavailable => "#f44336",
        }
    }
}

impl Serialize for MarkerColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.hex())
    }
}

impl JsonSchema for MarkerColor {
    fn schema_name() -> String {
        "MarkerColor".to_owned()
    }

    fn schema_id() -> Cow<'static, str> {
        Cow::Borrowed(concat!(module_path!(), "::MarkerColor"))
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        SchemaObject {
            instance_type: Some(InstanceType::String.into()),
            format: Some("color".to_owned()),
            ..Default::default()
        }
        .into()
    }
}
