//! Service health endpoint.

use reqwest::Client;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::HealthStatus;

/// Fetch `GET /health`.
pub async fn get_health(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<HealthStatus> {
    let url = format!("{}/health", base_url);

    let response = send_request(client.get(&url), "/health", metrics).await?;

    response
        .json::<HealthStatus>()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse health status: {e}")))
}
