//! Error types for the creature API client.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during creature API operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error (connection, DNS, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the API.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The requested creature does not exist.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates the creature does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if this error happened below the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }
}

/// The raw query did not contain a single usable identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("please provide at least one identifier")]
pub struct ValidationError;

/// Errors that can occur while exporting a sprite image.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The card has no sprite URL to fetch.
    #[error("No image available for {0}")]
    MissingSprite(String),

    /// Fetching the image bytes failed.
    #[error("Failed to download image for {name}: {source}")]
    Fetch {
        name: String,
        #[source]
        source: ClientError,
    },

    /// Writing the image to disk failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
