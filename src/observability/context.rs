//! Trace context carried across the asynchronous HTTP boundary.
//!
//! A store request records the span that issued it; when the reply arrives in
//! a later plugin callback, attaching the context makes the reply's handling a
//! child of that span in the exported trace.

use serde::{Deserialize, Serialize};

/// Hex-encoded trace and span IDs of the span that issued a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a 32-digit hex string.
    pub trace_id: String,

    /// Span ID of the issuing span as a 16-digit hex string.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the current tracing span's OpenTelemetry IDs.
    ///
    /// Returns `None` when there is no valid span context, e.g. tracing was
    /// never initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }

    /// Makes this context the current remote parent until the guard drops.
    ///
    /// Returns `None` if either ID is not valid hex.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        if !span_context.is_valid() {
            return None;
        }

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);
        Some(otel_context.attach())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_context_without_a_tracer() {
        assert!(TraceContext::from_current().is_none());
    }

    #[test]
    fn attach_requires_valid_ids() {
        let bad = TraceContext {
            trace_id: "not-hex".into(),
            parent_span_id: "00f067aa0ba902b7".into(),
        };
        assert!(bad.attach().is_none());

        let zero = TraceContext {
            trace_id: "0".repeat(32),
            parent_span_id: "0".repeat(16),
        };
        assert!(zero.attach().is_none());

        let good = TraceContext {
            trace_id: "4bf92f3577b34da6a3ce929d0e0e4736".into(),
            parent_span_id: "00f067aa0ba902b7".into(),
        };
        assert!(good.attach().is_some());
    }
}
