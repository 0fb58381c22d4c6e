use chrono::NaiveDateTime;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for croncheck-core operations
pub type Result<T> = std::result::Result<T, CheckError>;

/// Plugin status levels, ordered by severity of what they report.
///
/// Each level maps to the fixed exit code a monitoring poller expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Status {
    /// Get the process exit code for this status
    pub fn exit_code(&self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Warning => 1,
            Status::Critical => 2,
            Status::Unknown => 3,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
            Status::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

/// Terminal outcomes of the check pipeline.
///
/// Every stage fails closed: anything unexpected surfaces as UNKNOWN rather
/// than defaulting to OK. Only a provably missing execution is CRITICAL.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("invalid cron schedule '{expression}': {reason}")]
    InvalidSchedule { expression: String, reason: String },

    #[error("no log file matching {pattern} is newer than {expected}")]
    NoLogFileFound {
        pattern: String,
        expected: NaiveDateTime,
    },

    #[error("oldest log line ({first}) is newer than the expected execution ({expected})")]
    LogWindowTooShort {
        first: NaiveDateTime,
        expected: NaiveDateTime,
    },

    #[error("log file {} is empty", .path.display())]
    EmptyLogFile { path: PathBuf },

    #[error("no execution found in {}", .path.display())]
    ExecutionNotFound { path: PathBuf },

    #[error("could not parse a log timestamp from '{line}'")]
    UnparsableTimestamp { line: String },

    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("invalid log path pattern: {0}")]
    InvalidGlob(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckError {
    /// Get the plugin status this error terminates the check with
    pub fn status(&self) -> Status {
        match self {
            CheckError::ExecutionNotFound { .. } => Status::Critical,
            _ => Status::Unknown,
        }
    }
}

/// The one result a check invocation produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub status: Status,
    pub message: String,
}

impl CheckResult {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        CheckResult {
            status,
            message: message.into(),
        }
    }
}

impl From<CheckError> for CheckResult {
    fn from(err: CheckError) -> Self {
        CheckResult::new(err.status(), err.to_string())
    }
}
