//! Route Viewer - Application Library
//!
//! Drives a [`route_model_lib::RouteModel`] from a route document on disk and
//! prints the resulting instruction list, the way the navigation sidebar
//! would show it.

mod app;

pub use app::document::RouteDocument;
pub use app::format::{MeasurementSystem, pretty_distance, pretty_time};
pub use app::printer::InstructionListPrinter;
pub use app::settings::Settings;
pub use app::{RouteSession, run};

use route_model_lib::RouteError;
use tracing_subscriber::EnvFilter;

/// Error types for the viewer
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Route error: {0}")]
    Route(#[from] RouteError),
}

pub type Result<T> = std::result::Result<T, ViewerError>;

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `default_filter`. Logs go to stderr so stdout only
/// carries the instruction list.
pub fn init_logging(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_line_number(true)
        .with_target(true)
        .init();
}
