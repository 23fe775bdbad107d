/// Service configuration loaded from a TOML file.
///
/// Every section and key is optional; missing values take the defaults the
/// dashboard has always used (12-hour alert cooldown, critical index above
/// 200, fallback average index of 185). Breakpoint tables are deliberately
/// absent: they are fixed reference data in `breakpoints`.

use serde::Deserialize;
use std::path::Path;

use crate::logging::LogLevel;
use crate::model::ConfigError;

/// Environment variable naming the config file path.
pub const CONFIG_ENV_VAR: &str = "AIRWATCH_CONFIG";

/// Longest accepted alert cooldown: one year.
pub const MAX_COOLDOWN_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// debug | info | warn | error
    pub level: String,
    /// Optional JSON-lines log file.
    pub file: Option<String>,
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            timestamps: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Hours a region stays in cooldown after an alert is sent.
    pub cooldown_hours: i64,
    /// Stored reports with a headline index above this are critical.
    pub critical_index_threshold: f64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            cooldown_hours: 12,
            critical_index_threshold: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Average index shown when no reports are stored yet.
    pub fallback_average_index: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            fallback_average_index: 185,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub alerts: AlertConfig,
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level()?;
        let cooldown = self.alerts.cooldown_hours;
        if cooldown <= 0 || cooldown > MAX_COOLDOWN_HOURS {
            return Err(ConfigError::Invalid(format!(
                "alerts.cooldown_hours must be between 1 and {}, got {}",
                MAX_COOLDOWN_HOURS, cooldown
            )));
        }
        let threshold = self.alerts.critical_index_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "alerts.critical_index_threshold must be a non-negative number, got {}",
                threshold
            )));
        }
        Ok(())
    }

    pub fn log_level(&self) -> Result<LogLevel, ConfigError> {
        self.logging
            .level
            .parse()
            .map_err(|e: String| ConfigError::Invalid(format!("logging.level: {}", e)))
    }
}

/// Reads and validates the config file at `path`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
    Config::from_toml_str(&contents)
}

/// Loads `.env` if present, then the file named by `AIRWATCH_CONFIG`.
/// Falls back to defaults when the variable is unset.
pub fn load_from_env() -> Result<Config, ConfigError> {
    dotenv::dotenv().ok();
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => load_config(path.trim()),
        _ => Ok(Config::default()),
    }
}
