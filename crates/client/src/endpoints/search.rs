//! Name suggestion endpoint.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Fetch names matching `keyword` from `GET /search?keyword=`.
///
/// Names are returned in server order.
pub async fn search_names(
    client: &Client,
    base_url: &str,
    keyword: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<String>> {
    let url = format!("{}/search", base_url);

    let builder = client.get(&url).query(&[("keyword", keyword)]);
    let response = send_request(builder, "/search", metrics).await?;

    response
        .json::<Vec<String>>()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse suggestions: {e}")))
}
