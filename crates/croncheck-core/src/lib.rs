//! croncheck-core - the decision pipeline behind the `croncheck` plugin.
//!
//! Given a job's crontab command line and its cron schedule, the pipeline
//! computes when the job was last supposed to run, locates the rotated
//! (optionally gzip-compressed) log file covering that window, extracts the
//! job's execution record, reconstructs its timestamp and grades the
//! deviation against the warning/critical thresholds.
//!
//! The stages run strictly in sequence and fail closed: any condition that
//! prevents a verdict surfaces as UNKNOWN, never as a silent OK. Only a
//! provably missing execution is CRITICAL.

pub mod check;
pub mod classify;
pub mod command;
pub mod config;
pub mod error;
pub mod extract;
pub mod logfile;
pub mod schedule;
pub mod timestamp;

// Re-export the types a caller needs to run a check and report it
pub use check::{CheckReport, run_check};
pub use config::CheckConfig;
pub use error::{CheckError, CheckResult, Result, Status};
