//! Name suggestions for the search field.

use tracing::debug;

use crate::client::PokedexClient;
use crate::endpoints;
use crate::error::Result;

impl PokedexClient {
    /// Fetch names matching `keyword`, in server order.
    ///
    /// A blank keyword yields no suggestions and issues no request.
    pub async fn suggest(&self, keyword: &str) -> Result<Vec<String>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let names =
            endpoints::search_names(&self.http, &self.base_url, keyword, self.metrics()).await?;
        debug!(keyword_len = keyword.len(), count = names.len(), "Fetched suggestions");

        Ok(names)
    }
}
