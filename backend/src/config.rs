//! Dashboard configuration.
//!
//! Every field has a default, so a missing file or an empty YAML document
//! both produce a usable configuration. The path comes from the
//! `APPOINTMENT_DASHBOARD_CONFIG` environment variable when set.

use chrono::Weekday;
use log::info;
use serde::{Deserialize, Serialize};
use shared::ThemePreference;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::calendar;

pub const CONFIG_PATH_ENV: &str = "APPOINTMENT_DASHBOARD_CONFIG";

pub const DEFAULT_MONTHS_PER_PAGE: usize = 8;
pub const DEFAULT_MOBILE_BREAKPOINT: f32 = 768.0;
pub const DEFAULT_SCROLL_SETTLE_DELAY_MS: u64 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("months_per_page must be at least 1")]
    InvalidMonthsPerPage,
    #[error("mobile_breakpoint must be positive, got {0}")]
    InvalidBreakpoint(f32),
    #[error("year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Year shown at startup; current year when absent
    pub year: Option<i32>,
    pub first_day_of_week: Weekday,
    /// Months per page in the paged layout
    pub months_per_page: usize,
    /// Viewport widths below this use the scrolling layout
    pub mobile_breakpoint: f32,
    /// Delay before scrolling to the current month
    pub scroll_settle_delay_ms: u64,
    pub theme: ThemePreference,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            year: None,
            first_day_of_week: Weekday::Sun,
            months_per_page: DEFAULT_MONTHS_PER_PAGE,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            scroll_settle_delay_ms: DEFAULT_SCROLL_SETTLE_DELAY_MS,
            theme: ThemePreference::Light,
        }
    }
}

impl DashboardConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: DashboardConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        info!("⚙️ CONFIG: Loaded dashboard config from {}", path.display());
        Ok(config)
    }

    /// Load from the path in `APPOINTMENT_DASHBOARD_CONFIG`, or defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                info!("⚙️ CONFIG: {} not set, using defaults", CONFIG_PATH_ENV);
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.months_per_page == 0 {
            return Err(ConfigError::InvalidMonthsPerPage);
        }
        if !(self.mobile_breakpoint > 0.0) {
            return Err(ConfigError::InvalidBreakpoint(self.mobile_breakpoint));
        }
        if let Some(year) = self.year {
            let years = calendar::supported_years();
            if !years.contains(&year) {
                return Err(ConfigError::YearOutOfRange {
                    year,
                    min: *years.start(),
                    max: *years.end(),
                });
            }
        }
        Ok(())
    }

    pub fn scroll_settle_delay_secs(&self) -> f64 {
        self.scroll_settle_delay_ms as f64 / 1000.0
    }
}
