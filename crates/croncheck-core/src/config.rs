use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Regex fragments wrapped around the escaped command text to form the
/// search pattern for a cron-daemon log record.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogLinePattern {
    /// Matches the daemon's pid announcement up to the opening `CMD (`,
    /// tolerating leading whitespace inside the parentheses
    pub prefix: String,
    /// Matches the closing parenthesis after the command
    pub suffix: String,
}

impl Default for LogLinePattern {
    fn default() -> Self {
        LogLinePattern {
            prefix: r"CRON\[[0-9]+\]: \(.+\) CMD \(\s*".to_string(),
            suffix: r"\)".to_string(),
        }
    }
}

/// Shape of the timestamp leading every log line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimestampFormat {
    /// Regex extracting the timestamp from the start of a line
    pub pattern: String,
    /// chrono format string the extracted text parses with
    pub format: String,
    /// Whether the timestamp lacks a year that must be taken from the log
    /// file's own modification time. Disable for log formats whose `format`
    /// carries `%Y`.
    pub year_inference: bool,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        TimestampFormat {
            pattern: r"^[A-Z][a-z]{2}\s+[0-9]{1,2}\s+[0-9]{2}:[0-9]{2}:[0-9]{2}".to_string(),
            format: "%b %d %H:%M:%S".to_string(),
            year_inference: true,
        }
    }
}

/// Check configuration.
///
/// All values have working defaults for a stock Debian-style syslog setup;
/// a TOML file can override any subset of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Glob pattern over the rotated log files
    pub log_path: String,
    /// Deviation in seconds at which the check degrades to WARNING
    pub warning_seconds: i64,
    /// Deviation in seconds at which the check degrades to CRITICAL
    pub critical_seconds: i64,
    pub log_line: LogLinePattern,
    pub timestamp: TimestampFormat,
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig {
            log_path: "/var/log/syslog*".to_string(),
            warning_seconds: 1800,
            critical_seconds: 3600,
            log_line: LogLinePattern::default(),
            timestamp: TimestampFormat::default(),
        }
    }
}

impl CheckConfig {
    /// Load config from a TOML file. Unlike the defaults, an unreadable or
    /// invalid file is an error: a half-applied config must not silently
    /// turn into an OK verdict.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: CheckConfig = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }
}
