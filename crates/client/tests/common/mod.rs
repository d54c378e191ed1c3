//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Every client built here talks to a wiremock server, never a real host

#[allow(unused_imports)]
pub use pokedex_client::testing::load_fixture;

#[allow(unused_imports)]
pub use pokedex_client::{ClientError, PokedexClient};
#[allow(unused_imports)]
pub use wiremock::matchers::{method, path, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at `server` with caching enabled.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> PokedexClient {
    PokedexClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build")
}

/// Client pointed at `server` with caching disabled.
#[allow(dead_code)]
pub fn uncached_client_for(server: &MockServer) -> PokedexClient {
    PokedexClient::builder()
        .base_url(server.uri())
        .no_cache()
        .build()
        .expect("client should build")
}

/// Mount a `GET /{identifier}` mock answering with a creature fixture.
#[allow(dead_code)]
pub async fn mount_creature(server: &MockServer, identifier: &str, fixture: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{identifier}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .mount(server)
        .await;
}

/// Mount a `GET /{identifier}` mock answering 404 like the real backend.
#[allow(dead_code)]
pub async fn mount_not_found(server: &MockServer, identifier: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{identifier}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(load_fixture("not_found.json")))
        .mount(server)
        .await;
}
