//! Trace export to a local OTLP/JSON file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter
//!                                                                     │
//!                                  <data dir>/rentalizer-otlp.json ◄──┘
//! ```
//!
//! Each exported batch is one line holding a complete `resourceSpans`
//! document, so the file can be replayed into any OTLP-aware viewer. The file
//! rotates at 10 MB and keeps three numbered backups.
//!
//! The filter level comes from the `trace_level` plugin option and defaults
//! to `info`.

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
pub use rotation::{RotatingFile, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
