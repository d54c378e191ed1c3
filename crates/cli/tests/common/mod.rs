//! Shared test utilities for pokedex-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount creature fixtures on wiremock servers.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(unused_imports)]
pub use pokedex_client::testing::load_fixture;

/// Returns a hermetic `pokedex-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `POKEDEX_*` variables from the host are cleared.
pub fn pokedex_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pokedex-cli");

    cmd.env("DOTENV_DISABLED", "1");

    for var in [
        "POKEDEX_BASE_URL",
        "POKEDEX_TIMEOUT",
        "POKEDEX_CACHE_ENABLED",
        "POKEDEX_CACHE_MAX_ENTRIES",
        "POKEDEX_CACHE_TTL_SECS",
        "POKEDEX_SUGGEST_DEBOUNCE_MS",
        "POKEDEX_MAX_SUGGESTIONS",
        "POKEDEX_THEME",
        "POKEDEX_CONFIG_PATH",
    ] {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic `pokedex-cli` command pointed at `base_url`.
#[allow(dead_code)]
pub fn pokedex_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = pokedex_cmd();
    cmd.env("POKEDEX_BASE_URL", base_url);
    cmd
}

/// Mount `GET /{identifier}` answering with a creature fixture.
#[allow(dead_code)]
pub async fn mount_creature(server: &MockServer, identifier: &str, fixture: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{identifier}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture(fixture)))
        .mount(server)
        .await;
}

/// Mount `GET /{identifier}` answering 404.
#[allow(dead_code)]
pub async fn mount_not_found(server: &MockServer, identifier: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{identifier}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "Pokemon not found"
        })))
        .mount(server)
        .await;
}
