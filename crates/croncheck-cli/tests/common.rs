//! Shared fixture for the croncheck integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use chrono::{DateTime, Local};
use filetime::FileTime;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Format an instant the way the syslog daemon stamps lines
/// (`%e` is the space-padded day of month).
pub fn syslog_stamp(t: &DateTime<Local>) -> String {
    t.format("%b %e %H:%M:%S").to_string()
}

/// A cron-daemon execution record for `command` at `t`.
pub fn cron_line(t: &DateTime<Local>, command: &str) -> String {
    format!(
        "{} testhost CRON[2112]: (root) CMD ({})",
        syslog_stamp(t),
        command
    )
}

/// An unrelated syslog line at `t`.
pub fn noise_line(t: &DateTime<Local>) -> String {
    format!("{} testhost rsyslogd: log opened", syslog_stamp(t))
}

/// Test fixture holding a temporary directory of rotated log files.
pub struct LogFixture {
    temp_dir: TempDir,
}

impl Default for LogFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl LogFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The glob pattern covering this fixture's log files.
    pub fn glob(&self) -> String {
        format!("{}/syslog*", self.temp_dir.path().display())
    }

    pub fn write_log(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, lines.join("\n") + "\n").expect("Failed to write log");
        path
    }

    pub fn write_gz_log(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let file = fs::File::create(&path).expect("Failed to create log");
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder
            .write_all((lines.join("\n") + "\n").as_bytes())
            .expect("Failed to write compressed log");
        encoder.finish().expect("Failed to finish compressed log");
        path
    }

    pub fn set_mtime(&self, path: &Path, t: &DateTime<Local>) {
        filetime::set_file_mtime(path, FileTime::from_unix_time(t.timestamp(), 0))
            .expect("Failed to set mtime");
    }

    /// Run croncheck against this fixture's log files.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("croncheck").expect("Failed to find croncheck binary");
        cmd.arg("--log-path").arg(self.glob());
        cmd
    }

    /// Run croncheck without the fixture's `--log-path` preset.
    pub fn raw_command(&self) -> Command {
        Command::cargo_bin("croncheck").expect("Failed to find croncheck binary")
    }
}
