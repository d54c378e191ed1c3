//! Sprite image download.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Download the raw bytes behind an absolute sprite URL.
pub async fn fetch_sprite(
    client: &Client,
    sprite_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<u8>> {
    let url = reqwest::Url::parse(sprite_url)
        .map_err(|e| ClientError::InvalidUrl(format!("{sprite_url}: {e}")))?;

    let response = send_request(client.get(url), "sprite", metrics).await?;
    let bytes = response.bytes().await?;

    Ok(bytes.to_vec())
}
