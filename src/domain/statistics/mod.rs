pub mod distribution;
pub mod global;
pub mod grid;
pub mod grids;
pub mod leaderboard;
pub mod temporal;

pub use distribution::{Distribution, DistributionBin};
pub use global::{GlobalStatistics, GridSummary};
pub use grid::{GridStatistics, JokerUsage, ScoreSummary, WordsStats};
pub use grids::Grid;
pub use leaderboard::LeaderboardEntry;
pub use temporal::{DailyCount, DayCount, HourCount, HourlyCounts, TemporalStatistics};

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` like a missing field.
///
/// Combined with `#[serde(default)]`, every numeric field of a payload ends up
/// as zero when the server omits it or sends `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
