use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PREFIX: &str = "/api/v1/statistics";

/// A mock statistics API plus an isolated state directory for one CLI test.
pub struct TestServer {
    pub server: MockServer,
    pub state_dir: TempDir,
    rt: Runtime,
}

impl TestServer {
    pub fn start() -> Self {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");
        let server = rt.block_on(MockServer::start());
        let state_dir = tempfile::tempdir().expect("Failed to create state dir");
        Self {
            server,
            state_dir,
            rt,
        }
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn mount_json(&self, route: &str, body: Value) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(format!("{PREFIX}{route}")))
                .respond_with(ResponseTemplate::new(200).set_body_json(body)),
        );
    }

    pub fn mount_error(&self, route: &str, status: u16, detail: &str) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(format!("{PREFIX}{route}")))
                .respond_with(ResponseTemplate::new(status).set_body_json(json!({"detail": detail}))),
        );
    }

    /// Fail the test if `route` is ever requested.
    pub fn forbid(&self, route: &str) {
        self.mount(
            Mock::given(method("GET"))
                .and(path(format!("{PREFIX}{route}")))
                .respond_with(ResponseTemplate::new(500))
                .expect(0),
        );
    }

    pub fn run(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        run_crosswords(&self.server.uri(), self.state_dir.path(), args, env)
    }
}

pub fn run_crosswords(
    api_url: &str,
    state_dir: &std::path::Path,
    args: &[&str],
    env: &[(&str, &str)],
) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crosswords-analytics"))
        .args(args)
        .env("CROSSWORDS_API_URL", api_url)
        .env("CROSSWORDS_STATE_DIR", state_dir)
        .env_remove("CROSSWORDS_APP_PASSWORD")
        .env_remove("CROSSWORDS_PASSWORD")
        .env_remove("RUST_LOG")
        .env_remove("RUST_LOG_FORMAT")
        .envs(env.iter().copied())
        .current_dir(state_dir)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to run crosswords-analytics")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn grids_body() -> Value {
    json!([
        {"id": 4, "gridNumber": 1, "version": "v1"},
        {"id": 9, "gridNumber": 2, "version": "v2"}
    ])
}

pub fn global_body() -> Value {
    json!({
        "totalUsers": 1200,
        "totalGrids": 2,
        "totalSubmissions": 300,
        "averageSubmissionsPerGrid": 150.0,
        "gridStats": [
            {"gridId": 4, "gridVersion": "v1", "totalPlayers": 80, "completionRate": 55.5,
             "jokerUsageRate": 12.0, "totalWords": 24, "averageWordsFound": 17.2,
             "medianCompletionTime": 754.0},
            {"gridId": 9, "gridVersion": "v2", "totalPlayers": 40, "completionRate": 70.0,
             "jokerUsageRate": 12.5, "totalWords": 20, "averageWordsFound": 15.0,
             "medianCompletionTime": 600.0}
        ]
    })
}

pub fn grid_stats_body(grid_id: i64, grid_number: i64) -> Value {
    json!({
        "gridId": grid_id,
        "gridNumber": grid_number,
        "totalPlayers": 40,
        "totalSubmissions": 50,
        "completionRate": 62.5,
        "jokerUsage": {"totalUsed": 12, "usageRate": 24.0},
        "wordsStats": {"averageFound": 17.6, "totalWords": 24},
        "scores": {"median": 71.4, "mean": 70.0, "min": 12.0, "max": 99.0}
    })
}

pub fn distribution_body() -> Value {
    json!({
        "bins": [{"start": 60, "end": 180, "count": 5}, {"start": 180, "end": 300, "count": 2}],
        "min": 65, "mean": 150.4, "max": 290, "median": 125
    })
}

pub fn temporal_body() -> Value {
    json!({
        "gridNumber": 1,
        "submissionsByHour": {"9": 3, "14": 7},
        "submissionsByDayOfWeek": [{"day": "Lundi", "count": 4}, {"day": "Mardi", "count": 6}],
        "dailyTimeline": [{"date": "2025-03-15", "count": 10}],
        "peakHours": [{"hour": 14, "count": 7}],
        "firstSubmission": "2025-03-15T08:05:00",
        "lastSubmission": "2025-03-15T21:40:00",
        "totalSubmissions": 10,
        "uniqueDays": 1,
        "averageSubmissionsPerDay": 10.0
    })
}

pub fn leaderboard_body() -> Value {
    json!([
        {"rank": 1, "pseudo": "ada", "finalScore": 98.5, "completionTime": 125,
         "jokerUsed": false, "isCompleted": true, "submittedAt": "2025-03-15T14:30:00"},
        {"rank": 2, "pseudo": "bob", "finalScore": 90.0, "completionTime": 3725,
         "jokerUsed": true, "isCompleted": true, "submittedAt": "2025-03-16T09:05:00"},
        {"rank": 4, "pseudo": "eve", "finalScore": null, "completionTime": null,
         "jokerUsed": false, "isCompleted": false, "submittedAt": null}
    ])
}

/// Mount every endpoint of grid 4 (grid number 1).
pub fn mount_grid_four(server: &TestServer) {
    server.mount_json("/grids", grids_body());
    server.mount_json("/grid/4", grid_stats_body(4, 1));
    server.mount_json("/grid/4/distribution", json!({"bins": [{"start": 0, "end": 10, "count": 3}]}));
    server.mount_json("/grid/4/completion-time-distribution", distribution_body());
    server.mount_json("/grid/4/temporal", temporal_body());
    server.mount_json("/grid/4/leaderboard", leaderboard_body());
}
