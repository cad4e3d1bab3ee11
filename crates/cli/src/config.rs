//! Runtime configuration for `courier-note`.
//!
//! Every option can come from the command line or a `COURIER_*` environment
//! variable; flags win. `RUST_LOG` is handled by the observability crate.

use std::path::PathBuf;

use clap::Parser;

use courier_observability::LogFormat;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "courier-note",
    about = "Render a delivery note from a JSON order document",
    version
)]
pub struct Config {
    /// Path to the JSON order document
    #[arg(value_name = "ORDER_FILE", env = "COURIER_ORDER_FILE")]
    pub order_file: PathBuf,

    /// Log output format (json or pretty)
    #[arg(long, env = "COURIER_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,

    /// How many `update_status` calls to make before rendering
    #[arg(long, env = "COURIER_ADVANCE_STATUS", default_value_t = 0)]
    pub advance_status: u32,
}
