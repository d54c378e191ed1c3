//! Lookup outcomes and their classification into a search report.

use serde::Serialize;

use crate::error::ClientError;
use crate::models::CreatureRecord;
use crate::profile::CreatureCard;

/// Message shown when a search produced no cards at all.
pub const NOT_FOUND_MESSAGE: &str = "Creature not found. Try another name or ID.";

/// Why a single identifier could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum LookupFailure {
    /// The API answered 404.
    NotFound,
    /// The API answered with another non-success status.
    Status(u16),
    /// The request never got a usable response.
    Transport(String),
    /// The response body was not a creature record.
    Parse(String),
}

impl std::fmt::Display for LookupFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => f.write_str("not found"),
            Self::Status(status) => write!(f, "HTTP {status}"),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
            Self::Parse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl From<&ClientError> for LookupFailure {
    fn from(error: &ClientError) -> Self {
        if error.is_not_found() {
            return Self::NotFound;
        }
        match error {
            ClientError::ApiError { status, .. } => Self::Status(*status),
            ClientError::InvalidResponse(msg) => Self::Parse(msg.clone()),
            ClientError::HttpError(e) if e.is_decode() => Self::Parse(e.to_string()),
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Settled result of one identifier lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupOutcome {
    pub identifier: String,
    pub result: Result<CreatureRecord, LookupFailure>,
}

impl LookupOutcome {
    pub fn success(identifier: impl Into<String>, record: CreatureRecord) -> Self {
        Self {
            identifier: identifier.into(),
            result: Ok(record),
        }
    }

    pub fn failure(identifier: impl Into<String>, failure: LookupFailure) -> Self {
        Self {
            identifier: identifier.into(),
            result: Err(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// One failed identifier in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedLookup {
    pub identifier: String,
    pub reason: LookupFailure,
}

/// Outcomes partitioned into renderable cards and failed identifiers.
///
/// Both lists keep the order in which lookups were issued.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SearchReport {
    pub cards: Vec<CreatureCard>,
    pub failed: Vec<FailedLookup>,
}

impl SearchReport {
    pub fn from_outcomes(outcomes: Vec<LookupOutcome>) -> Self {
        let mut report = Self::default();

        for outcome in outcomes {
            match outcome.result {
                Ok(record) => report.cards.push(CreatureCard::from_record(&record)),
                Err(reason) => report.failed.push(FailedLookup {
                    identifier: outcome.identifier,
                    reason,
                }),
            }
        }

        report
    }

    /// True when no lookup succeeded.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Failed identifiers in issue order.
    pub fn failed_identifiers(&self) -> impl Iterator<Item = &str> {
        self.failed.iter().map(|f| f.identifier.as_str())
    }

    /// Aggregate banner naming every failed identifier, if any failed.
    pub fn error_banner(&self) -> Option<String> {
        if self.failed.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.failed_identifiers().collect();
        Some(format!("Could not find: {}", names.join(", ")))
    }

    /// Generic message shown when there is nothing to render.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(NOT_FOUND_MESSAGE)
    }
}
