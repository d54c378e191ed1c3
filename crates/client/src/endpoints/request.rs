//! Single-shot request helper.
//!
//! Sends one request, records metrics, and turns non-success statuses into
//! [`ClientError`]s. Lookups are never retried.

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Error body shapes the API is known to send (`{"error": ...}` or `{"message": ...}`).
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// Sends a request and returns the response if the status is a success.
///
/// # Errors
///
/// - `ClientError::HttpError` when the request fails below HTTP.
/// - `ClientError::NotFound` for 404.
/// - `ClientError::ApiError` for any other non-success status.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, "GET");
    }
    let started = Instant::now();

    let response = match builder.send().await {
        Ok(response) => response,
        Err(e) => {
            let err = ClientError::from(e);
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, "GET", started.elapsed(), None);
                m.record_client_error(endpoint, "GET", &err);
            }
            return Err(err);
        }
    };

    let status = response.status();
    if let Some(m) = metrics {
        m.record_request_duration(endpoint, "GET", started.elapsed(), Some(status.as_u16()));
    }

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    debug!(status = status.as_u16(), %url, "Request returned non-success status");

    let err = if status.as_u16() == 404 {
        ClientError::NotFound(url)
    } else {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        ClientError::ApiError {
            status: status.as_u16(),
            url,
            message: error_message(body),
        }
    };

    if let Some(m) = metrics {
        m.record_client_error(endpoint, "GET", &err);
    }
    Err(err)
}

/// Prefer the structured error text over the raw body when there is one.
fn error_message(body: String) -> String {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(ErrorBody {
            error: Some(text), ..
        })
        | Ok(ErrorBody {
            message: Some(text),
            ..
        }) => text,
        _ => body,
    }
}
