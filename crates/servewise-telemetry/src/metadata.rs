//! OTLP resource for the recommender process

use opentelemetry::KeyValue;
use opentelemetry_sdk::Resource;
use opentelemetry_semantic_conventions::resource as semconv;
use servewise_config::TelemetryConfig;

/// Resource attached to every exported span and metric
///
/// Carries the operator's `[telemetry.resource_attributes]` (deployment
/// environment, region, ...) plus `service.name` from `telemetry.service_name`
/// and `service.version` from the servewise release. The two service keys
/// always come from those settings, even if the attribute table repeats them.
pub fn build_resource(config: &TelemetryConfig) -> Resource {
    let operator = config
        .resource_attributes
        .iter()
        .map(|(key, value)| KeyValue::new(key.clone(), value.clone()));
    let identity = [
        KeyValue::new(semconv::SERVICE_NAME, config.service_name.clone()),
        KeyValue::new(semconv::SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
    ];

    Resource::builder().with_attributes(operator.chain(identity)).build()
}
