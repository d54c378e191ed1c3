//! Prometheus exposition for the metrics recorded by [`crate::metrics`].
//!
//! Installing the exporter registers a global recorder and serves
//! `/metrics` over HTTP on the given address. Both binaries enable it
//! with `--metrics-bind`.

use std::net::SocketAddr;

use metrics_exporter_prometheus::{Matcher, PrometheusBuilder};
use tracing::info;

use crate::metrics::{
    METRIC_LOOKUP_BATCH_SIZE, METRIC_REQUEST_DURATION, METRIC_TUI_FRAME_RENDER_DURATION,
};

/// Histogram buckets for each histogram metric we record.
const HISTOGRAM_BUCKETS: &[(&str, &[f64])] = &[
    (
        METRIC_REQUEST_DURATION,
        &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0],
    ),
    (
        METRIC_TUI_FRAME_RENDER_DURATION,
        &[0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1],
    ),
    (METRIC_LOOKUP_BATCH_SIZE, &[1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0]),
];

/// Handle for an installed Prometheus exporter.
#[derive(Debug)]
pub struct MetricsExporter {
    bind_addr: SocketAddr,
}

impl MetricsExporter {
    /// Install the Prometheus exporter as the global metrics recorder.
    ///
    /// # Errors
    /// Returns an error if the bind address does not parse, the bucket
    /// configuration is rejected, or another recorder is already installed.
    pub fn install(bind_addr: &str) -> Result<Self, MetricsExporterError> {
        let addr: SocketAddr = bind_addr
            .parse()
            .map_err(|e| MetricsExporterError::InvalidBindAddress(bind_addr.to_string(), e))?;

        let mut builder = PrometheusBuilder::new();
        for (name, buckets) in HISTOGRAM_BUCKETS {
            builder = builder.set_buckets_for_metric(Matcher::Full((*name).to_string()), buckets)?;
        }

        builder
            .with_http_listener(addr)
            .install()
            .map_err(|e| match e {
                metrics_exporter_prometheus::BuildError::FailedToSetGlobalRecorder(_) => {
                    MetricsExporterError::RecorderAlreadyInstalled
                }
                other => MetricsExporterError::BuildError(other.to_string()),
            })?;

        info!(%addr, "Prometheus metrics exporter listening on /metrics");

        Ok(Self { bind_addr: addr })
    }

    /// Address the exporter listens on.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Errors that can occur when installing the metrics exporter.
#[derive(Debug, thiserror::Error)]
pub enum MetricsExporterError {
    #[error("Invalid bind address '{0}': {1}")]
    InvalidBindAddress(String, std::net::AddrParseError),

    #[error("A metrics recorder is already installed")]
    RecorderAlreadyInstalled,

    #[error("Failed to build Prometheus exporter: {0}")]
    BuildError(String),
}

impl From<metrics_exporter_prometheus::BuildError> for MetricsExporterError {
    fn from(err: metrics_exporter_prometheus::BuildError) -> Self {
        MetricsExporterError::BuildError(err.to_string())
    }
}
