use serde_json::json;

use crate::helpers::spawn_api;

#[tokio::test]
async fn global_statistics_include_per_grid_summaries() {
    let api = spawn_api().await;
    api.mount_json(
        "/global",
        json!({
            "totalUsers": 120,
            "totalGrids": 2,
            "totalSubmissions": 300,
            "averageSubmissionsPerGrid": 150.0,
            "gridStats": [
                {"gridId": 1, "gridVersion": "v1", "totalPlayers": 80, "completionRate": 55.5,
                 "jokerUsageRate": 12.0, "totalWords": 24, "averageWordsFound": 17.2,
                 "medianCompletionTime": 754.0},
                {"gridId": 2, "gridVersion": "v2", "totalPlayers": 40, "jokerUsageRate": 12.5}
            ]
        }),
    )
    .await;

    let stats = api.client.global().get().await.unwrap();

    assert_eq!(stats.total_users, 120);
    assert_eq!(stats.grid_stats.len(), 2);
    assert_eq!(stats.grid_stats[0].median_completion_time, 754.0);
    assert_eq!(stats.grid_stats[1].completion_rate, 0.0);
}
