//! Health check model for the creature API.

use serde::{Deserialize, Serialize};

/// Body of `GET /health`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    /// Whether the service reports itself as up.
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case("up")
    }
}
