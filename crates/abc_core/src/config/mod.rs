use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;

/// Settings for the log and dashboard views. Every field has a default, so `{}` is a valid
/// config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Day counts offered by the dashboard period toggle.
    #[serde(default = "default_dashboard_periods")]
    pub dashboard_periods: Vec<u32>,

    /// The period the dashboard toggle starts on; must be one of `dashboard_periods`.
    #[serde(default = "default_period_days")]
    pub default_period_days: u32,

    /// File name prefix for CSV exports (`<prefix>-<observed>.csv`).
    #[serde(default = "default_export_file_prefix")]
    pub export_file_prefix: String,
}

fn default_dashboard_periods() -> Vec<u32> {
    vec![7, 30, 90]
}

fn default_period_days() -> u32 {
    7
}

fn default_export_file_prefix() -> String {
    "IncidentLog".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dashboard_periods: default_dashboard_periods(),
            default_period_days: default_period_days(),
            export_file_prefix: default_export_file_prefix(),
        }
    }
}

impl LogConfig {
    pub fn from_json_str(text: &str) -> Result<Self, AppError> {
        let config: LogConfig = serde_json::from_str(text).map_err(|e| {
            AppError::new("CONFIG_PARSE_FAILED", "Failed to parse log config JSON")
                .with_details(e.to_string())
        })?;
        config.validate()?;
        debug!(
            dashboard_periods = ?config.dashboard_periods,
            default_period_days = config.default_period_days,
            export_file_prefix = %config.export_file_prefix,
            "loaded log config"
        );
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|e| {
            AppError::new("CONFIG_READ_FAILED", "Failed to read log config file")
                .with_details(format!("path={}: {}", path.display(), e))
        })?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.dashboard_periods.is_empty() {
            return Err(AppError::new(
                "CONFIG_INVALID",
                "dashboard_periods must not be empty",
            ));
        }
        if self.dashboard_periods.contains(&0) {
            return Err(AppError::new(
                "CONFIG_INVALID",
                "dashboard_periods must be positive day counts",
            ));
        }
        if !self.dashboard_periods.contains(&self.default_period_days) {
            return Err(AppError::new(
                "CONFIG_INVALID",
                "default_period_days must be one of dashboard_periods",
            )
            .with_details(format!(
                "default_period_days={}; dashboard_periods={:?}",
                self.default_period_days, self.dashboard_periods
            )));
        }
        if self.export_file_prefix.trim().is_empty() {
            return Err(AppError::new(
                "CONFIG_INVALID",
                "export_file_prefix must not be blank",
            ));
        }
        if self.export_file_prefix.contains(['/', '\\'])
            || self.export_file_prefix.contains("..")
        {
            return Err(AppError::new(
                "CONFIG_INVALID",
                "export_file_prefix must be a plain file name prefix",
            )
            .with_details(format!("export_file_prefix={}", self.export_file_prefix)));
        }
        Ok(())
    }
}
