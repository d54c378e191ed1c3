//! Sprite downloads.

use crate::client::PokedexClient;
use crate::endpoints;
use crate::error::Result;

impl PokedexClient {
    /// Download the image bytes behind an absolute sprite URL.
    pub async fn fetch_sprite(&self, sprite_url: &str) -> Result<Vec<u8>> {
        endpoints::fetch_sprite(&self.http, sprite_url, self.metrics()).await
    }
}
