//! Bundled configuration
//!
//! The dashboard accepts no runtime configuration: `config/dashboard.toml`
//! is compiled into the bundle and parsed once at startup.

use storewatch_shared::{DashboardConfig, DashboardError, LogLevel};

const BUNDLED_CONFIG: &str = include_str!("../config/dashboard.toml");

/// Parse the configuration compiled into the bundle
pub fn bundled() -> Result<DashboardConfig, DashboardError> {
    DashboardConfig::from_toml(BUNDLED_CONFIG)
}

/// Maximum tracing level for a configured log level
pub fn tracing_level(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Trace => tracing::Level::TRACE,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Error => tracing::Level::ERROR,
    }
}
