use crosswords_analytics::infrastructure::client::StatisticsClient;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PREFIX: &str = "/api/v1/statistics";

pub struct TestApi {
    pub server: MockServer,
    pub client: StatisticsClient,
}

pub async fn spawn_api() -> TestApi {
    let server = MockServer::start().await;
    let client = StatisticsClient::from_base_url(&server.uri()).unwrap();
    TestApi { server, client }
}

impl TestApi {
    /// Answer `GET {PREFIX}{route}` with `body`, expecting exactly one call.
    pub async fn mount_json(&self, route: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("{PREFIX}{route}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    pub async fn mount_status(&self, route: &str, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("{PREFIX}{route}")))
            .respond_with(template)
            .mount(&self.server)
            .await;
    }
}
