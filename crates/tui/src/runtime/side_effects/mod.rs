//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Run API calls for search, suggestion, export and health actions.
//! - Spawn each call on the shared `TaskTracker` so the UI never blocks.
//! - Send results back through the action channel.
//!
//! Does NOT handle:
//! - State mutation (results travel back as actions).
//! - UI rendering.
//!
//! Invariants:
//! - The client is shared as `Arc<PokedexClient>`; lookups never wait on a lock.
//! - A search always ends with `Action::Loading(false)`, even if its task panics.

mod dispatcher;
mod export;
mod health;
mod search;
mod suggest;

use pokedex_client::PokedexClient;
use std::sync::Arc;

pub use dispatcher::handle_side_effects;
pub use search::LoadingGuard;
pub use tokio_util::task::TaskTracker;

/// Client handle shared by every spawned task.
pub type SharedClient = Arc<PokedexClient>;
