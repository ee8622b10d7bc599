use super::StatisticsClient;
use crate::domain::errors::StatisticsError;
use crate::domain::statistics::GlobalStatistics;

pub struct GlobalClient<'a> {
    client: &'a StatisticsClient,
}

impl<'a> GlobalClient<'a> {
    pub fn new(client: &'a StatisticsClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<GlobalStatistics, StatisticsError> {
        let url = self.client.endpoint("global")?;
        self.client.get_json(url).await
    }
}
