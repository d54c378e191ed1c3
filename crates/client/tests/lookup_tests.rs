//! Lookup and search tests against a mock creature API.

mod common;

use std::time::Duration;

use common::*;
use pokedex_client::{LookupFailure, NOT_FOUND_MESSAGE, ValidationError};

#[tokio::test]
async fn test_get_creature() {
    let server = MockServer::start().await;
    mount_creature(&server, "pikachu", "creature/pikachu.json").await;

    let record = client_for(&server).get_creature("pikachu").await.unwrap();

    assert_eq!(record.id, 25);
    assert_eq!(record.name, "pikachu");
    assert_eq!(record.base_experience, Some(112));
    assert_eq!(record.stats.len(), 6);
}

#[tokio::test]
async fn test_get_creature_not_found() {
    let server = MockServer::start().await;
    mount_not_found(&server, "missingno").await;

    let err = client_for(&server)
        .get_creature("missingno")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_creature_server_error_keeps_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/25"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "Failed to fetch Pokemon data"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).get_creature("25").await.unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to fetch Pokemon data");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).get_creature("1").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_identifier_is_percent_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mr%20mime"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("creature/ditto.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let record = uncached_client_for(&server)
        .get_creature("mr mime")
        .await
        .unwrap();
    assert_eq!(record.name, "ditto");
}

#[tokio::test]
async fn test_search_partial_failure() {
    let server = MockServer::start().await;
    mount_creature(&server, "pikachu", "creature/pikachu.json").await;
    mount_not_found(&server, "bogus123").await;

    let report = client_for(&server)
        .search("pikachu, bogus123")
        .await
        .unwrap();

    assert_eq!(report.cards.len(), 1);
    assert_eq!(report.cards[0].name, "pikachu");
    assert_eq!(report.cards[0].total, 320);
    assert_eq!(
        report.error_banner().as_deref(),
        Some("Could not find: bogus123")
    );
    assert_eq!(report.failed[0].reason, LookupFailure::NotFound);
    assert_eq!(report.empty_message(), None);
}

#[tokio::test]
async fn test_search_all_failed() {
    let server = MockServer::start().await;
    mount_not_found(&server, "a").await;
    mount_not_found(&server, "b").await;

    let report = client_for(&server).search("a,b").await.unwrap();

    assert!(report.cards.is_empty());
    assert_eq!(report.empty_message(), Some(NOT_FOUND_MESSAGE));
    assert_eq!(report.error_banner().as_deref(), Some("Could not find: a, b"));
}

#[tokio::test]
async fn test_search_preserves_issue_order_when_settling_out_of_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/dragonite"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("creature/dragonite.json"))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;
    mount_creature(&server, "ditto", "creature/ditto.json").await;
    mount_creature(&server, "pikachu", "creature/pikachu.json").await;

    let report = client_for(&server)
        .search("dragonite, ditto, pikachu")
        .await
        .unwrap();

    let names: Vec<&str> = report.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["dragonite", "ditto", "pikachu"]);
}

#[tokio::test]
async fn test_search_issues_lookups_concurrently() {
    let server = MockServer::start().await;
    for name in ["a", "b", "c"] {
        Mock::given(method("GET"))
            .and(path(format!("/{name}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(load_fixture("creature/pikachu.json"))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&server)
            .await;
    }

    let started = std::time::Instant::now();
    let report = client_for(&server).search("a,b,c").await.unwrap();

    assert_eq!(report.cards.len(), 3);
    assert!(
        started.elapsed() < Duration::from_millis(800),
        "lookups ran sequentially: {:?}",
        started.elapsed()
    );
}

#[tokio::test]
async fn test_one_failure_does_not_affect_others() {
    let server = MockServer::start().await;
    mount_creature(&server, "pikachu", "creature/pikachu.json").await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let report = client_for(&server).search("broken,pikachu").await.unwrap();

    assert_eq!(report.cards.len(), 1);
    assert_eq!(report.failed[0].reason, LookupFailure::Status(503));
}

#[tokio::test]
async fn test_blank_query_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = client_for(&server).search(" , ,, ").await;
    assert_eq!(result.unwrap_err(), ValidationError);
}

#[tokio::test]
async fn test_identifiers_are_not_case_normalized() {
    let server = MockServer::start().await;
    mount_creature(&server, "Pikachu", "creature/pikachu.json").await;

    let report = client_for(&server).search("Pikachu").await.unwrap();
    assert_eq!(report.cards.len(), 1);
}

#[tokio::test]
async fn test_cached_lookup_skips_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pikachu"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("creature/pikachu.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.search("pikachu").await.unwrap();
    let report = client.search("pikachu").await.unwrap();

    assert_eq!(report.cards[0].name, "pikachu");
}

#[tokio::test]
async fn test_failures_are_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missingno"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.search("missingno").await.unwrap();
    client.search("missingno").await.unwrap();
}

#[tokio::test]
async fn test_uncached_client_always_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/25"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("creature/pikachu.json")),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = uncached_client_for(&server);
    client.get_creature("25").await.unwrap();
    client.get_creature("25").await.unwrap();
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let client = PokedexClient::builder()
        .base_url("http://127.0.0.1:1".to_string())
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let report = client.search("pikachu").await.unwrap();
    assert!(matches!(
        report.failed[0].reason,
        LookupFailure::Transport(_)
    ));
}
