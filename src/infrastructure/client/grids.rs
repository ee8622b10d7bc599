use super::StatisticsClient;
use super::define_grid_fetch;
use crate::domain::errors::StatisticsError;
use crate::domain::statistics::{Distribution, Grid, GridStatistics};

pub struct GridsClient<'a> {
    client: &'a StatisticsClient,
}

impl<'a> GridsClient<'a> {
    pub fn new(client: &'a StatisticsClient) -> Self {
        Self { client }
    }

    /// Grids available for selection.
    pub async fn list(&self) -> Result<Vec<Grid>, StatisticsError> {
        let url = self.client.endpoint("grids")?;
        self.client.get_json(url).await
    }

    define_grid_fetch!(statistics, "", GridStatistics);

    define_grid_fetch!(score_distribution, "/distribution", Distribution);

    define_grid_fetch!(
        /// Bin boundaries and scalars are in seconds.
        completion_time_distribution,
        "/completion-time-distribution",
        Distribution
    );
}
