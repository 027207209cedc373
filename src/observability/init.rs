//! Subscriber setup.

use super::exporter;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every exported span.
pub const SERVICE_NAME: &str = "Rentalizer";

/// File name of the live trace file inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "rentalizer-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber: `EnvFilter` → OpenTelemetry layer → trace file.
///
/// Tracing is best effort. If the data directory cannot be created nothing is
/// installed, and a second call is a no-op because a subscriber already exists.
///
/// ```rust
/// use rentalizer::observability::init_tracing;
/// use rentalizer::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing ready");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
