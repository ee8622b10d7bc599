use super::StatisticsClient;
use crate::domain::errors::StatisticsError;
use crate::domain::ids::GridId;
use crate::domain::source::DEFAULT_LEADERBOARD_LIMIT;
use crate::domain::statistics::LeaderboardEntry;

pub struct LeaderboardClient<'a> {
    client: &'a StatisticsClient,
}

impl<'a> LeaderboardClient<'a> {
    pub fn new(client: &'a StatisticsClient) -> Self {
        Self { client }
    }

    /// At most `limit` entries, ranked by the server.
    pub async fn get(
        &self,
        grid: GridId,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>, StatisticsError> {
        let mut url = self.client.endpoint(&format!("grid/{grid}/leaderboard"))?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        self.client.get_json(url).await
    }

    /// The API's default page of `DEFAULT_LEADERBOARD_LIMIT` entries.
    pub async fn get_default(&self, grid: GridId) -> Result<Vec<LeaderboardEntry>, StatisticsError> {
        self.get(grid, DEFAULT_LEADERBOARD_LIMIT).await
    }
}
