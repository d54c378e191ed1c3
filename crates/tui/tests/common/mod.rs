//! Common test utilities for TUI app and side effect tests.
//!
//! # Invariants
//! - Fixtures come from the client crate's fixtures directory
//! - Every client built here talks to a wiremock server on a random port

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

pub use pokedex_client::testing::load_fixture;
pub use pokedex_client::{
    CreatureRecord, LookupFailure, LookupOutcome, PokedexClient, SearchReport,
};
pub use pokedex_tui::action::Action;
pub use pokedex_tui::app::{App, AppSettings};
pub use pokedex_tui::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};
pub use tokio::sync::mpsc::{Receiver, Sender, channel};
pub use wiremock::matchers::{method, path, query_param};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// App with default settings and an 80x24 screen.
pub fn app() -> App {
    app_with(AppSettings::default())
}

/// App with `settings` and an 80x24 screen.
pub fn app_with(settings: AppSettings) -> App {
    let mut app = App::new(settings);
    app.update(Action::Resize(80, 24));
    app
}

/// Parse a creature fixture, e.g. `record("pikachu")`.
pub fn record(name: &str) -> CreatureRecord {
    serde_json::from_value(load_fixture(&format!("creature/{name}.json")))
        .expect("fixture should be a creature record")
}

/// Report for a search where `found` resolved and `missing` returned 404.
pub fn report(found: &[&str], missing: &[&str]) -> SearchReport {
    let mut outcomes: Vec<LookupOutcome> = found
        .iter()
        .map(|name| LookupOutcome::success(*name, record(name)))
        .collect();
    outcomes.extend(
        missing
            .iter()
            .map(|id| LookupOutcome::failure(*id, LookupFailure::NotFound)),
    );
    SearchReport::from_outcomes(outcomes)
}

/// Shared client pointed at `server`, without a cache.
pub fn client_for(server: &MockServer) -> SharedClient {
    Arc::new(
        PokedexClient::builder()
            .base_url(server.uri())
            .no_cache()
            .build()
            .expect("client should build"),
    )
}

/// Mount a `GET /{identifier}` mock answering with a creature fixture.
pub async fn mount_creature(server: &MockServer, identifier: &str, fixture: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{identifier}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .mount(server)
        .await;
}

/// Mount a `GET /{identifier}` mock answering 404.
pub async fn mount_not_found(server: &MockServer, identifier: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{identifier}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(load_fixture("not_found.json")))
        .mount(server)
        .await;
}

/// Receive the next action or fail after two seconds.
pub async fn recv(rx: &mut Receiver<Action>) -> Action {
    tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timed out waiting for action")
        .expect("channel closed")
}
