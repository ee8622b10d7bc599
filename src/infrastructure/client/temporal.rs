use super::StatisticsClient;
use super::define_grid_fetch;
use crate::domain::statistics::TemporalStatistics;

pub struct TemporalClient<'a> {
    client: &'a StatisticsClient,
}

impl<'a> TemporalClient<'a> {
    pub fn new(client: &'a StatisticsClient) -> Self {
        Self { client }
    }

    define_grid_fetch!(get, "/temporal", TemporalStatistics);
}
