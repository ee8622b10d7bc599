pub mod global;
pub mod grids;
pub mod leaderboard;
pub mod temporal;

/// Generates a GET method for a grid-scoped statistics resource.
///
/// # Example
/// ```ignore
/// define_grid_fetch!(
///     /// Temporal statistics for a grid.
///     get, "/temporal", TemporalStatistics
/// );
/// ```
macro_rules! define_grid_fetch {
    ($(#[$meta:meta])* $name:ident, $suffix:literal, $payload:ty) => {
        $(#[$meta])*
        pub async fn $name(
            &self,
            grid: $crate::domain::ids::GridId,
        ) -> Result<$payload, $crate::domain::errors::StatisticsError> {
            let url = self.client.endpoint(&format!(concat!("grid/{}", $suffix), grid))?;
            self.client.get_json(url).await
        }
    };
}

pub(crate) use define_grid_fetch;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::errors::StatisticsError;
use crate::domain::ids::GridId;
use crate::domain::source::StatisticsSource;
use crate::domain::statistics::{
    Distribution, GlobalStatistics, Grid, GridStatistics, LeaderboardEntry, TemporalStatistics,
};

/// Default API location when no override is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

const STATISTICS_PATH: &str = "api/v1/statistics/";
const USER_AGENT: &str = "crosswords-analytics/1.0";

pub struct StatisticsClient {
    base_url: Url,
    http: Client,
}

impl StatisticsClient {
    pub fn new(base_url: Url) -> Result<Self, StatisticsError> {
        let mut normalized = base_url;
        if !normalized.path().ends_with('/') {
            normalized.set_path(&format!("{}/", normalized.path().trim_end_matches('/')));
        }

        let base_url = normalized
            .join(STATISTICS_PATH)
            .map_err(|err| StatisticsError::InvalidUrl(format!("{normalized}: {err}")))?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(transport_error)?;

        Ok(Self { base_url, http })
    }

    pub fn from_base_url(base_url: &str) -> Result<Self, StatisticsError> {
        let url = Url::parse(base_url)
            .map_err(|err| StatisticsError::InvalidUrl(format!("{base_url}: {err}")))?;
        Self::new(url)
    }

    /// Root of the statistics API, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn global(&self) -> global::GlobalClient<'_> {
        global::GlobalClient::new(self)
    }

    pub fn grids(&self) -> grids::GridsClient<'_> {
        grids::GridsClient::new(self)
    }

    pub fn leaderboards(&self) -> leaderboard::LeaderboardClient<'_> {
        leaderboard::LeaderboardClient::new(self)
    }

    pub fn temporal(&self) -> temporal::TemporalClient<'_> {
        temporal::TemporalClient::new(self)
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, StatisticsError> {
        self.base_url
            .join(path)
            .map_err(|err| StatisticsError::InvalidUrl(format!("{path}: {err}")))
    }

    pub(crate) async fn get_json<T>(&self, url: Url) -> Result<T, StatisticsError>
    where
        T: DeserializeOwned,
    {
        debug!(%url, "fetching statistics");
        let response = self.http.get(url).send().await.map_err(transport_error)?;
        self.handle_response(response).await
    }

    pub(crate) async fn handle_response<T>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, StatisticsError>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(self.response_error(response).await);
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&bytes).map_err(|err| StatisticsError::Decode(err.to_string()))
    }

    pub(crate) async fn response_error(&self, response: reqwest::Response) -> StatisticsError {
        let status = response.status();
        let bytes = response.bytes().await.unwrap_or_default();

        let message = error_message(&bytes).unwrap_or_else(|| {
            let body = String::from_utf8_lossy(&bytes).trim().to_string();
            if body.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            }
        });

        debug!(status = status.as_u16(), %message, "statistics request failed");
        StatisticsError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

/// Pulls a human-readable message out of a JSON error body
/// (`{"detail": "..."}` or `{"message": "..."}`).
fn error_message(bytes: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    ["detail", "message"]
        .iter()
        .find_map(|key| value.get(key)?.as_str().map(str::to_string))
}

fn transport_error(err: reqwest::Error) -> StatisticsError {
    StatisticsError::Transport(err.to_string())
}

#[async_trait]
impl StatisticsSource for StatisticsClient {
    async fn list_grids(&self) -> Result<Vec<Grid>, StatisticsError> {
        self.grids().list().await
    }

    async fn global_statistics(&self) -> Result<GlobalStatistics, StatisticsError> {
        self.global().get().await
    }

    async fn grid_statistics(&self, grid: GridId) -> Result<GridStatistics, StatisticsError> {
        self.grids().statistics(grid).await
    }

    async fn leaderboard(
        &self,
        grid: GridId,
        limit: u32,
    ) -> Result<Vec<LeaderboardEntry>, StatisticsError> {
        self.leaderboards().get(grid, limit).await
    }

    async fn score_distribution(&self, grid: GridId) -> Result<Distribution, StatisticsError> {
        self.grids().score_distribution(grid).await
    }

    async fn completion_time_distribution(
        &self,
        grid: GridId,
    ) -> Result<Distribution, StatisticsError> {
        self.grids().completion_time_distribution(grid).await
    }

    async fn temporal_statistics(
        &self,
        grid: GridId,
    ) -> Result<TemporalStatistics, StatisticsError> {
        self.temporal().get(grid).await
    }
}
