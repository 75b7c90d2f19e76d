//! Dashboard configuration
//!
//! The configuration is compiled into the bundle and parsed from TOML at
//! startup. Every section and key is optional; anything missing falls back
//! to the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Default delay before the mock aggregates replace the zeroed counters
pub const DEFAULT_MOCK_DELAY_MS: u32 = 1500;

/// Default number of stores per chart page
pub const DEFAULT_STORES_PER_PAGE: usize = 4;

/// Support telephone link opened by the help desk
pub const SUPPORT_PHONE_LINK: &str = "tel:+551134567890";

/// Support e-mail link opened by the help desk
pub const SUPPORT_EMAIL_LINK: &str = "mailto:suporte@monitoramento.com";

/// Complete dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub app: AppConfig,
    pub loading: LoadingConfig,
    pub chart: ChartConfig,
    pub support: SupportConfig,
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(s: &str) -> Result<Self, DashboardError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Convert to a TOML string
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check values that parse fine but cannot be rendered
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.chart.stores_per_page == 0 {
            return Err(DashboardError::InvalidConfig(
                "chart.stores_per_page must be at least 1".to_string(),
            ));
        }

        if !self.support.phone_link.starts_with("tel:") {
            return Err(DashboardError::InvalidConfig(format!(
                "support.phone_link must be a tel: link, got '{}'",
                self.support.phone_link
            )));
        }

        if !self.support.email_link.starts_with("mailto:") {
            return Err(DashboardError::InvalidConfig(format!(
                "support.email_link must be a mailto: link, got '{}'",
                self.support.email_link
            )));
        }

        Ok(())
    }
}

/// Application metadata shown in the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version string shown in the help desk footer
    pub version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: "2.1.0".to_string(),
        }
    }
}

/// Mock data loading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    /// Delay in milliseconds before the mock aggregates are applied
    pub mock_delay_ms: u32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            mock_delay_ms: DEFAULT_MOCK_DELAY_MS,
        }
    }
}

/// Multi-store chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub stores_per_page: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            stores_per_page: DEFAULT_STORES_PER_PAGE,
        }
    }
}

/// Support contact links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportConfig {
    pub phone_link: String,
    pub email_link: String,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            phone_link: SUPPORT_PHONE_LINK.to_string(),
            email_link: SUPPORT_EMAIL_LINK.to_string(),
        }
    }
}

/// Logging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level forwarded to the browser console
    pub level: LogLevel,
}

/// Log verbosity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Info,
    Warn,
    Error,
}
