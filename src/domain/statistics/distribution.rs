use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One histogram bin covering `[start, end)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionBin {
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
}

/// Score or completion-time histogram with its summary scalars.
///
/// Completion-time distributions express bin boundaries and scalars in seconds.
/// Only time distributions carry a median.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    #[serde(default, deserialize_with = "null_as_default")]
    pub bins: Vec<DistributionBin>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mean: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max: f64,
    #[serde(default)]
    pub median: Option<f64>,
}
