//! Creature record endpoint.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::endpoints::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::CreatureRecord;

/// Fetch one creature record by name or numeric id.
///
/// The identifier is percent-encoded but otherwise sent exactly as given.
pub async fn get_creature(
    client: &Client,
    base_url: &str,
    identifier: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<CreatureRecord> {
    let url = format!("{}/{}", base_url, encode_path_segment(identifier));

    let response = send_request(client.get(&url), "/{identifier}", metrics).await?;
    let body = response.text().await?;

    serde_json::from_str(&body).map_err(|e| {
        let err =
            ClientError::InvalidResponse(format!("Failed to parse creature '{identifier}': {e}"));
        if let Some(m) = metrics {
            m.record_client_error("/{identifier}", "GET", &err);
        }
        err
    })
}
