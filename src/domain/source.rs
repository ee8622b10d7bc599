use async_trait::async_trait;

use super::errors::StatisticsError;
use super::ids::GridId;
use super::statistics::{
    Distribution, GlobalStatistics, Grid, GridStatistics, LeaderboardEntry, TemporalStatistics,
};

/// Leaderboard size requested when the caller does not pick one.
pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 100;

/// Where the dashboard reads its statistics from.
///
/// Every call is a single fetch: no retries, no caching, no deduplication.
#[async_trait]
pub trait StatisticsSource: Send + Sync {
    async fn list_grids(&self) -> Result<Vec<Grid>, StatisticsError>;
    async fn global_statistics(&self) -> Result<GlobalStatistics, StatisticsError>;
    async fn grid_statistics(&self, grid: GridId) -> Result<GridStatistics, StatisticsError>;
    async fn leaderboard(
        &self,
        grid: GridId,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>, StatisticsError>;
    async fn score_distribution(&self, grid: GridId) -> Result<Distribution, StatisticsError>;
    async fn completion_time_distribution(
        &self,
        grid: GridId,
    ) -> Result<Distribution, StatisticsError>;
    async fn temporal_statistics(
        &self,
        grid: GridId,
    ) -> Result<TemporalStatistics, StatisticsError>;
}
