//! OpenTelemetry tracer provider setup.

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};

use crate::config::telemetry::TelemetryConfig;

use super::ObservabilityError;

const SERVICE_NAMESPACE: &str = "padel";

pub(super) fn build_tracer_provider(
    config: &TelemetryConfig,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.endpoint.clone())
        .with_timeout(config.export_timeout())
        .build()?;

    Ok(SdkTracerProvider::builder()
        .with_sampler(sampler(config.sample_ratio))
        .with_id_generator(RandomIdGenerator::default())
        .with_resource(resource(config))
        .with_batch_exporter(exporter)
        .build())
}

fn resource(config: &TelemetryConfig) -> Resource {
    Resource::builder_empty()
        .with_service_name(config.service_name.clone())
        .with_attributes([
            KeyValue::new("service.namespace", SERVICE_NAMESPACE),
            KeyValue::new("service.version", config.service_version.clone()),
            KeyValue::new(
                "deployment.environment.name",
                config.environment.clone(),
            ),
        ])
        .build()
}

/// Honour the caller's sampling decision, otherwise sample by trace id.
fn sampler(ratio: f64) -> Sampler {
    Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(ratio.clamp(0.0, 1.0))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_ratios_are_clamped() {
        let high = format!("{:?}", sampler(4.0));
        let low = format!("{:?}", sampler(-1.0));

        assert!(high.contains("TraceIdRatioBased(1.0)"), "got {high}");
        assert!(low.contains("TraceIdRatioBased(0.0)"), "got {low}");
    }
}
