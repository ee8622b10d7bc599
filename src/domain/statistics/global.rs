use serde::{Deserialize, Serialize};

use crate::domain::ids::GridId;

use super::null_as_default;

/// Platform-wide totals plus one summary per grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStatistics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_users: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_grids: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_submissions: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_submissions_per_grid: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grid_stats: Vec<GridSummary>,
}

/// Per-grid summary embedded in the global statistics.
///
/// Rates are percentages (0-100); `median_completion_time` is in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub grid_id: GridId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grid_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_players: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completion_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub joker_usage_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_words: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_words_found: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub median_completion_time: f64,
}
