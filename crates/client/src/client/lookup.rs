//! Identifier lookups and the concurrent all-settle fan-out.

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::client::PokedexClient;
use crate::endpoints;
use crate::error::{Result, ValidationError};
use crate::models::CreatureRecord;
use crate::outcome::{LookupFailure, LookupOutcome, SearchReport};
use crate::query::parse_identifiers;

impl PokedexClient {
    /// Fetch a single creature, serving it from the cache when possible.
    pub async fn get_creature(&self, identifier: &str) -> Result<CreatureRecord> {
        if let Some(cache) = &self.cache
            && let Some(record) = cache.get(identifier).await
        {
            debug!(identifier, "Serving creature from cache");
            return Ok(record);
        }

        let record =
            endpoints::get_creature(&self.http, &self.base_url, identifier, self.metrics()).await?;

        if let Some(cache) = &self.cache {
            cache.insert(identifier, record.clone()).await;
        }

        Ok(record)
    }

    /// Look up every identifier concurrently and wait for all of them.
    ///
    /// One failing lookup never cancels or affects another. Outcomes come
    /// back in the order of `identifiers`, whatever order they settle in.
    pub async fn lookup_all(&self, identifiers: &[String]) -> Vec<LookupOutcome> {
        if let Some(m) = self.metrics() {
            m.record_lookup_batch(identifiers.len());
        }

        let lookups = identifiers.iter().map(|identifier| async move {
            match self.get_creature(identifier).await {
                Ok(record) => LookupOutcome::success(identifier.as_str(), record),
                Err(e) => {
                    warn!(identifier = %identifier, error = %e, "Lookup failed");
                    LookupOutcome::failure(identifier.as_str(), LookupFailure::from(&e))
                }
            }
        });

        join_all(lookups).await
    }

    /// Parse a raw query, look up every identifier and classify the outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] without issuing any request when the query
    /// holds no identifiers. Lookup failures are reported inside the
    /// [`SearchReport`], never as an error.
    pub async fn search(&self, raw: &str) -> std::result::Result<SearchReport, ValidationError> {
        let identifiers = parse_identifiers(raw)?;

        let outcomes = self.lookup_all(&identifiers).await;
        let report = SearchReport::from_outcomes(outcomes);

        info!(
            requested = identifiers.len(),
            found = report.cards.len(),
            failed = report.failed.len(),
            "Search completed"
        );

        Ok(report)
    }
}
