//! OTLP/JSON document model.
//!
//! Mirrors the subset of the OpenTelemetry protocol's JSON encoding that the
//! file exporter writes: one `resourceSpans` document per exported batch.
//! Ids are lowercase hex, timestamps are nanosecond strings, and 64-bit
//! integers are strings, as the protocol's JSON mapping requires.

use opentelemetry::trace::{SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// Instrumentation scope name written into every batch.
pub const SCOPE_NAME: &str = "rentalizer";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TracesData {
    pub resource_spans: Vec<ResourceSpans>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSpans {
    pub resource: OtlpResource,
    pub scope_spans: Vec<ScopeSpans>,
}

#[derive(Debug, Serialize)]
pub struct OtlpResource {
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
pub struct Scope {
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ScopeSpans {
    pub scope: Scope,
    pub spans: Vec<OtlpSpan>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpSpan {
    pub trace_id: String,
    pub span_id: String,
    /// Empty for root spans.
    pub parent_span_id: String,
    pub name: String,
    pub kind: u8,
    pub start_time_unix_nano: String,
    pub end_time_unix_nano: String,
    pub attributes: Vec<Attribute>,
    pub events: Vec<OtlpEvent>,
    pub status: OtlpStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtlpEvent {
    pub time_unix_nano: String,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Serialize)]
pub struct OtlpStatus {
    pub code: u8,
    pub message: String,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Attribute {
    pub key: String,
    pub value: AnyValue,
}

/// Attribute value, serialized as a single-key object such as `{"stringValue": "x"}`.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnyValue {
    BoolValue(bool),
    /// Stringified, per the JSON mapping of int64.
    IntValue(String),
    DoubleValue(f64),
    StringValue(String),
}

impl From<&Value> for AnyValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::BoolValue(*b),
            Value::I64(i) => Self::IntValue(i.to_string()),
            Value::F64(f) => Self::DoubleValue(*f),
            Value::String(s) => Self::StringValue(s.to_string()),
            // Arrays are flattened to their display form.
            Value::Array(_) => Self::StringValue(value.to_string()),
        }
    }
}

impl From<&KeyValue> for Attribute {
    fn from(kv: &KeyValue) -> Self {
        Self {
            key: kv.key.to_string(),
            value: AnyValue::from(&kv.value),
        }
    }
}

fn unix_nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos())
        .to_string()
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

impl From<&SpanData> for OtlpSpan {
    fn from(span: &SpanData) -> Self {
        let parent_span_id = if span.parent_span_id == SpanId::INVALID {
            String::new()
        } else {
            format!("{:016x}", span.parent_span_id)
        };

        let status = match &span.status {
            Status::Unset => OtlpStatus { code: 0, message: String::new() },
            Status::Ok => OtlpStatus { code: 1, message: String::new() },
            Status::Error { description } => OtlpStatus {
                code: 2,
                message: description.to_string(),
            },
        };

        Self {
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            name: span.name.to_string(),
            kind: kind_code(&span.span_kind),
            start_time_unix_nano: unix_nanos(span.start_time),
            end_time_unix_nano: unix_nanos(span.end_time),
            attributes: span.attributes.iter().map(Attribute::from).collect(),
            events: span
                .events
                .iter()
                .map(|event| OtlpEvent {
                    time_unix_nano: unix_nanos(event.timestamp),
                    name: event.name.to_string(),
                    attributes: event.attributes.iter().map(Attribute::from).collect(),
                })
                .collect(),
            status,
        }
    }
}

impl TracesData {
    /// Wraps one exported batch together with the resource describing the plugin.
    #[must_use]
    pub fn from_batch(resource: &Resource, batch: &[SpanData]) -> Self {
        let attributes = resource
            .iter()
            .map(|(key, value)| Attribute {
                key: key.to_string(),
                value: AnyValue::from(value),
            })
            .collect();

        Self {
            resource_spans: vec![ResourceSpans {
                resource: OtlpResource { attributes },
                scope_spans: vec![ScopeSpans {
                    scope: Scope { name: SCOPE_NAME },
                    spans: batch.iter().map(OtlpSpan::from).collect(),
                }],
            }],
        }
    }
}
