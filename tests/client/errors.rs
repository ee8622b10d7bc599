use std::net::TcpListener;

use crosswords_analytics::domain::{GridId, StatisticsError};
use crosswords_analytics::infrastructure::client::StatisticsClient;
use serde_json::json;
use wiremock::ResponseTemplate;

use crate::helpers::spawn_api;

#[tokio::test]
async fn error_status_carries_server_detail() {
    let api = spawn_api().await;
    api.mount_status(
        "/grid/99",
        ResponseTemplate::new(404).set_body_json(json!({"detail": "Grid not found"})),
    )
    .await;

    let err = api
        .client
        .grids()
        .statistics(GridId::new(99))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "request failed (404): Grid not found");
}

#[tokio::test]
async fn error_without_body_uses_reason_phrase() {
    let api = spawn_api().await;
    api.mount_status("/global", ResponseTemplate::new(500)).await;

    let err = api.client.global().get().await.unwrap_err();

    assert_eq!(
        err,
        StatisticsError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    );
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let api = spawn_api().await;
    api.mount_status(
        "/grids",
        ResponseTemplate::new(200).set_body_string("<html>not json</html>"),
    )
    .await;

    let err = api.client.grids().list().await.unwrap_err();

    assert!(matches!(err, StatisticsError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then release a port so nothing is listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let client = StatisticsClient::from_base_url(&format!("http://{address}")).unwrap();
    let err = client.grids().list().await.unwrap_err();

    assert!(matches!(err, StatisticsError::Transport(_)), "{err:?}");
}
