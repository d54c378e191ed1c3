//! Creature data API client.
//!
//! This crate provides a type-safe client for a PokeAPI-style creature
//! service: identifier parsing, concurrent all-settle lookups, search
//! suggestions, sprite downloads and the pure card derivations shared by
//! the CLI and the TUI.

pub mod client;
pub mod error;
pub mod export;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod outcome;
pub mod profile;
pub mod query;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub mod endpoints;

pub use client::PokedexClient;
pub use client::builder::PokedexClientBuilder;
pub use error::{ClientError, ExportError, Result, ValidationError};
pub use export::{export_sprite, sprite_file_name};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{CreatureRecord, HealthStatus};
pub use outcome::{LookupFailure, LookupOutcome, NOT_FOUND_MESSAGE, SearchReport};
pub use profile::{CreatureCard, StatLine};
pub use query::parse_identifiers;
