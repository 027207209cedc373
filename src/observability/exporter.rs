//! `SpanExporter` that appends OTLP/JSON batches to a rotating file.

use super::otlp::TracesData;
use super::rotation::RotatingFile;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    resource: Resource,
    closed: bool,
}

impl FileSpanExporter {
    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.closed {
            return Err(TraceError::from("trace exporter already shut down"));
        }
        let line = serde_json::to_string(&TracesData::from_batch(&self.resource, batch))
            .map_err(|e| TraceError::from(e.to_string()))?;
        self.file
            .append_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    /// Writes the batch as a single JSON line.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.closed = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

/// Builds a provider that exports every finished span synchronously to `path`.
///
/// Simple (non-batching) export: the wasm sandbox has no background threads.
pub fn file_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(path),
        resource: resource.clone(),
        closed: false,
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
