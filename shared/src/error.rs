//! Error types

use thiserror::Error;

/// Errors raised while loading the dashboard configuration
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Configuration parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
