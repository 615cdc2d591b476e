//! Tracing initialization and subscriber setup.
//!
//! Connects `tracing` macros to the file span exporter through the
//! OpenTelemetry layer.

use super::exporter;
use crate::infrastructure::paths::get_data_dir;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the span log inside the plugin data directory.
pub const SPAN_FILE_NAME: &str = "staffboard-spans.jsonl";

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured `trace_level`. Does
/// nothing if the data directory cannot be created or a subscriber is already
/// installed.
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.trace_level));

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", "staffboard"),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = exporter::create_tracer_provider(data_dir.join(SPAN_FILE_NAME), resource);
    let tracer = provider.tracer("staffboard");

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer));

    if subscriber.try_init().is_ok() {
        tracing::info!(api_base_url = %config.api_base_url, "tracing initialized");
    }
}
