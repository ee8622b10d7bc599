use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One ranked submission. Ordering is decided by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rank: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pseudo: String,
    #[serde(default)]
    pub final_score: Option<f64>,
    /// Seconds.
    #[serde(default)]
    pub completion_time: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub joker_used: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_completed: bool,
    #[serde(default)]
    pub submitted_at: Option<String>,
}
