/// Structured logging for the air quality alerting service
///
/// Provides context-rich logging with site identifiers, timestamps,
/// and severity levels. Console output is human-oriented and always goes
/// to stderr, leaving stdout to the binary's JSON output. The optional
/// log file receives one JSON object per line for the log shipper.

use chrono::Utc;
use serde_json::json;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;
use std::sync::Mutex;

/// Service tag written into every file entry.
pub const SERVICE_NAME: &str = "airwatch";

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Log Sources
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    Scoring,
    Dashboard,
    Alerts,
    Config,
    System,
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSource::Scoring => write!(f, "SCORE"),
            LogSource::Dashboard => write!(f, "DASH"),
            LogSource::Alerts => write!(f, "ALERT"),
            LogSource::Config => write!(f, "CFG"),
            LogSource::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for JSON-lines output
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        // A poisoned lock only means another thread panicked mid-log.
        let mut slot = LOGGER.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(logger);
    }

    fn log(&self, level: LogLevel, source: &LogSource, site_id: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let now = Utc::now();
        let site_part = site_id.map(|s| format!(" [{}]", s)).unwrap_or_default();

        if self.console_timestamps {
            let line = format!(
                "{} {} {}{}: {}",
                now.format("%Y-%m-%d %H:%M:%S UTC"),
                level,
                source,
                site_part,
                message
            );
            eprintln!("{}", line);
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗ {}{}: {}", source, site_part, message),
                LogLevel::Warning => eprintln!("   ⚠ {}{}: {}", source, site_part, message),
                LogLevel::Info => eprintln!("   {}", message),
                LogLevel::Debug => {} // Skip debug in non-timestamp mode
            }
        }

        if let Some(ref path) = self.log_file {
            let entry = json_entry(level, source, site_id, message, &now.to_rfc3339());
            if let Err(e) = Self::append_to_file(path, &entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

/// Renders one JSON-lines log entry.
fn json_entry(
    level: LogLevel,
    source: &LogSource,
    site_id: Option<&str>,
    message: &str,
    timestamp: &str,
) -> String {
    json!({
        "level": level.to_string().to_ascii_lowercase(),
        "message": message,
        "timestamp": timestamp,
        "service": SERVICE_NAME,
        "source": source.to_string(),
        "site": site_id,
    })
    .to_string()
}

fn with_logger(level: LogLevel, source: LogSource, site_id: Option<&str>, message: &str) {
    let guard = LOGGER.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(logger) = guard.as_ref() {
        logger.log(level, &source, site_id, message);
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

/// Log a general informational message
pub fn info(source: LogSource, site_id: Option<&str>, message: &str) {
    with_logger(LogLevel::Info, source, site_id, message);
}

/// Log a warning message
pub fn warn(source: LogSource, site_id: Option<&str>, message: &str) {
    with_logger(LogLevel::Warning, source, site_id, message);
}

/// Log an error message
pub fn error(source: LogSource, site_id: Option<&str>, message: &str) {
    with_logger(LogLevel::Error, source, site_id, message);
}

/// Log a debug message
pub fn debug(source: LogSource, site_id: Option<&str>, message: &str) {
    with_logger(LogLevel::Debug, source, site_id, message);
}

// ---------------------------------------------------------------------------
// Summary Logging
// ---------------------------------------------------------------------------

/// Log a summary of an alert sweep over the critical regions
pub fn log_alert_summary(critical: usize, drafted: usize, in_cooldown: usize) {
    let message = format!(
        "Alert sweep complete: {} critical, {} drafted, {} in cooldown",
        critical, drafted, in_cooldown
    );

    // Regions that were neither drafted nor cooling down had no score to draft from.
    if drafted + in_cooldown < critical {
        warn(LogSource::Alerts, None, &message);
    } else {
        info(LogSource::Alerts, None, &message);
    }
}
