use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod category;
pub mod vehicle;

/// A value annotated with its whole-meter distance to the viewer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithDistance<T> {
    pub distance_m: u32,
    #[serde(flatten)]
    pub content: T,
}

impl<T> WithDistance<T> {
    pub fn new(distance_m: u32, content: T) -> Self {
        Self {
            distance_m,
            content,
        }
    }
}
