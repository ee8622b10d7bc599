use crosswords_analytics::domain::GridId;
use serde_json::json;

use crate::helpers::spawn_api;

#[tokio::test]
async fn temporal_statistics_keep_hour_order() {
    let api = spawn_api().await;
    api.mount_json(
        "/grid/4/temporal",
        json!({
            "gridNumber": 1,
            "submissionsByHour": {"9": 3, "14": 7, "2": null},
            "submissionsByDayOfWeek": [{"day": "Lundi", "count": 4}],
            "dailyTimeline": [{"date": "2025-03-15", "count": 12}],
            "peakHours": [{"hour": 14, "count": 7}],
            "firstSubmission": "2025-03-15T08:00:00",
            "lastSubmission": null,
            "totalSubmissions": 10,
            "uniqueDays": 1,
            "averageSubmissionsPerDay": 10.0
        }),
    )
    .await;

    let stats = api.client.temporal().get(GridId::new(4)).await.unwrap();

    let hours: Vec<_> = stats.submissions_by_hour.iter().collect();
    assert_eq!(hours, vec![("9", 3), ("14", 7), ("2", 0)]);
    assert_eq!(stats.peak_hours[0].hour, 14);
    assert_eq!(stats.last_submission, None);
    assert_eq!(stats.unique_days, 1);
}
