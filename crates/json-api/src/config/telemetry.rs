//! Trace export and request telemetry settings.

use std::time::Duration;

use clap::Args;

/// OpenTelemetry export and slow-request settings.
#[derive(Debug, Args)]
pub struct TelemetryConfig {
    /// Export spans over OTLP.
    #[arg(long = "otel-enabled", env = "OTEL_ENABLED", default_value_t = false)]
    pub enabled: bool,

    /// Continue traces from an incoming `traceparent` header (needs export on).
    #[arg(
        long = "otel-parent-propagation-enabled",
        env = "OTEL_PARENT_PROPAGATION_ENABLED",
        default_value_t = false
    )]
    pub parent_propagation: bool,

    /// OTLP gRPC collector endpoint.
    #[arg(
        long = "otel-exporter-otlp-endpoint",
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub endpoint: String,

    /// Exporter timeout in seconds.
    #[arg(
        long = "otel-exporter-otlp-timeout-seconds",
        env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS",
        default_value_t = 3
    )]
    pub export_timeout_seconds: u64,

    /// `service.name` resource attribute.
    #[arg(long = "otel-service-name", env = "OTEL_SERVICE_NAME", default_value = "padel-json")]
    pub service_name: String,

    /// `service.version` resource attribute.
    #[arg(
        long = "otel-service-version",
        env = "OTEL_SERVICE_VERSION",
        default_value = env!("CARGO_PKG_VERSION")
    )]
    pub service_version: String,

    /// `deployment.environment.name` resource attribute.
    #[arg(
        long = "otel-deployment-environment",
        env = "OTEL_DEPLOYMENT_ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: String,

    /// Fraction of root traces to sample, between 0 and 1.
    #[arg(
        long = "otel-trace-sample-ratio",
        env = "OTEL_TRACE_SAMPLE_RATIO",
        default_value_t = 1.0,
        value_parser = parse_ratio
    )]
    pub sample_ratio: f64,

    /// Requests slower than this are logged at `warn`.
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}

impl TelemetryConfig {
    /// Exporter timeout as a [`Duration`].
    #[must_use]
    pub fn export_timeout(&self) -> Duration {
        Duration::from_secs(self.export_timeout_seconds)
    }

    /// Whether incoming trace context is honoured.
    #[must_use]
    pub fn propagates_parent(&self) -> bool {
        self.enabled && self.parent_propagation
    }
}

fn parse_ratio(raw: &str) -> Result<f64, String> {
    let ratio: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;

    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is outside 0.0..=1.0"))
    }
}
