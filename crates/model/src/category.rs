use std::{error::Error, fmt, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::vehicle::Vehicle;

/// User-facing filter chips. Labels are matched case-sensitively, exactly as
/// the UI sends them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Category {
    All,
    Bikes,
    Scooters,
    Car,
}

impl Category {
    /// Chip order, as rendered in the UI.
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Bikes,
        Category::Scooters,
        Category::Car,
    ];

    pub fn from_label(label: &str) -> Result<Self, UnknownCategory> {
        match label {
            "All" => Ok(Category::All),
            "Bikes" => Ok(Category::Bikes),
            "Scooters" => Ok(Category::Scooters),
            "Car" => Ok(Category::Car),
            other => Err(UnknownCategory(other.to_owned())),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Bikes => "Bikes",
            Category::Scooters => "Scooters",
            Category::Car => "Car",
        }
    }

    fn pattern(&self) -> Option<&'static str> {
        match self {
            Category::All => None,
            Category::Bikes => Some("bike"),
            Category::Scooters => Some("scooter"),
            Category::Car => Some("car"),
        }
    }

    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        match self.pattern() {
            None => true,
            Some(pattern) => vehicle.vehicle_type.to_lowercase().contains(pattern),
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A label outside the fixed category set. Distinguishes "filtered to zero
/// by design" from "category typo produced zero by accident".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown vehicle category {:?}", self.0)
    }
}

impl Error for UnknownCategory {}

/// Order-preserving subsequence of `fleet`. `All` is the identity and does
/// not run a predicate.
pub fn filter_by_category(
    fleet: Vec<Vehicle>,
    category: Category,
) -> Vec<Vehicle> {
    match category {
        Category::All => fleet,
        _ => fleet
            .into_iter()
            .filter(|vehicle| category.matches(vehicle))
            .collect(),
    }
}
