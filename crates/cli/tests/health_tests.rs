//! Integration tests for `pokedex-cli health`.

mod common;

use common::pokedex_cmd_with_base_url;
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_health_up() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "UP"})))
        .mount(&server)
        .await;

    pokedex_cmd_with_base_url(&server.uri())
        .arg("health")
        .assert()
        .success()
        .stdout("Status: UP\n");
}

#[tokio::test]
async fn test_health_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "UP"})))
        .mount(&server)
        .await;

    pokedex_cmd_with_base_url(&server.uri())
        .args(["health", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"UP\""));
}
