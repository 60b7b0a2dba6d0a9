//! Log filter setup

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unusable
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter from `RUST_LOG`-style directives, falling back to `info`
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
