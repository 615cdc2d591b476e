//! File-backed OpenTelemetry span exporter.
//!
//! Spans are written as one compact JSON object per line so the file can be
//! tailed or filtered with `jq` while the plugin runs:
//!
//! ```text
//! {"ts":"2026-01-04T10:00:00.120Z","service":"staffboard","name":"handle_event","trace_id":"…","span_id":"…","parent_span_id":null,"duration_us":412,"status":"unset","attributes":{"event_type":"Mount"},"events":[]}
//! ```

use super::log_file::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::{SpanId, Status, TraceError};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use serde_json::{json, Map, Value as JsonValue};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

struct FileSpanExporter {
    file: RotatingFile,
    service: String,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    fn new(path: PathBuf, resource: &Resource) -> Self {
        let service = resource
            .get(opentelemetry::Key::new("service.name"))
            .map_or_else(|| "unknown".to_string(), |value| value.to_string());

        Self {
            file: RotatingFile::new(path),
            service,
            is_shutdown: AtomicBool::new(false),
        }
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Box::pin(std::future::ready(Err(TraceError::from("exporter is shut down"))));
        }

        let written = batch
            .iter()
            .map(|span| format_span(&self.service, span).to_string())
            .try_for_each(|line| self.file.write_line(&line));

        Box::pin(std::future::ready(written.map_err(|e| TraceError::from(e.to_string()))))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("service", &self.service)
            .field("is_shutdown", &self.is_shutdown)
            .finish()
    }
}

fn format_span(service: &str, span: &SpanData) -> JsonValue {
    let start = chrono::DateTime::<chrono::Utc>::from(span.start_time);
    let duration_us = span
        .end_time
        .duration_since(span.start_time)
        .map_or(0, |elapsed| u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX));

    let parent = (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));

    let events: Vec<JsonValue> = span
        .events
        .iter()
        .map(|event| {
            json!({
                "ts": chrono::DateTime::<chrono::Utc>::from(event.timestamp)
                    .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                "name": event.name,
                "attributes": format_attributes(&event.attributes),
            })
        })
        .collect();

    json!({
        "ts": start.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "service": service,
        "name": span.name,
        "trace_id": format!("{:032x}", span.span_context.trace_id()),
        "span_id": format!("{:016x}", span.span_context.span_id()),
        "parent_span_id": parent,
        "duration_us": duration_us,
        "status": format_status(&span.status),
        "attributes": format_attributes(&span.attributes),
        "events": events,
    })
}

fn format_attributes(attributes: &[KeyValue]) -> JsonValue {
    let map: Map<String, JsonValue> = attributes
        .iter()
        .map(|kv| (kv.key.to_string(), format_value(&kv.value)))
        .collect();
    JsonValue::Object(map)
}

fn format_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => json!(b),
        Value::I64(i) => json!(i),
        Value::F64(f) => json!(f),
        Value::String(s) => json!(s.as_str()),
        Value::Array(_) => json!(value.to_string()),
    }
}

fn format_status(status: &Status) -> String {
    match status {
        Status::Unset => "unset".to_string(),
        Status::Ok => "ok".to_string(),
        Status::Error { description } => format!("error: {description}"),
    }
}

/// Builds a tracer provider whose spans are appended to `path`.
///
/// Uses the simple (synchronous) span processor.
pub fn create_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(path, &resource);
    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
