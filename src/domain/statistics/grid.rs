use serde::{Deserialize, Serialize};

use crate::domain::ids::GridId;

use super::null_as_default;

/// Detailed statistics for one grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStatistics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub grid_id: GridId,
    #[serde(default)]
    pub grid_number: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_players: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_submissions: u64,
    /// Percentage of submissions that completed the grid.
    #[serde(default, deserialize_with = "null_as_default")]
    pub completion_rate: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub joker_usage: JokerUsage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub words_stats: WordsStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scores: ScoreSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JokerUsage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_used: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub usage_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_found: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_words: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub median: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mean: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max: f64,
}
