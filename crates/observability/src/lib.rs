//! Tracing and logging setup shared by the courier binaries.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use tracing::{LogFormat, UnknownLogFormat};

/// Initialize process-wide logging.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init(format: LogFormat) {
    tracing::init(format);
}
