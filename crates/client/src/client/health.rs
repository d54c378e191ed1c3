//! Service health.

use crate::client::PokedexClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::HealthStatus;

impl PokedexClient {
    /// Query `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus> {
        endpoints::get_health(&self.http, &self.base_url, self.metrics()).await
    }
}
