//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! - Spans go to `staffboard-spans.jsonl` in the plugin data directory
//! - The file rotates at 5 MiB, keeping 3 backups
//! - Level comes from `RUST_LOG`, then the `trace_level` option, then `info`
//!
//! Store requests carry a [`TraceContext`] through the plugin's web request
//! context map so the handling of a reply joins the trace of the request.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `exporter`: Span exporter and tracer provider
//! - `log_file`: Size-rotated log file
//! - `context`: Trace context capture and re-attachment

mod context;
mod exporter;
mod init;
mod log_file;

pub use context::TraceContext;
pub use init::{init_tracing, SPAN_FILE_NAME};
