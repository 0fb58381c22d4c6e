mod common;

use chrono::{DateTime, Duration, Local, Timelike};
use common::{LogFixture, cron_line, noise_line};
use predicates::prelude::*;
use std::fs;

fn write_config(fixture: &LogFixture, contents: &str) -> String {
    let path = fixture.path().join("croncheck.toml");
    fs::write(&path, contents).expect("Failed to write config");
    path.display().to_string()
}

#[test]
fn test_log_path_from_config_file() {
    let fixture = LogFixture::new();
    let now = Local::now();
    let minute = now.with_second(0).unwrap();

    let log = fixture.write_log("syslog", &[noise_line(&minute), cron_line(&now, "run-backup")]);
    fixture.set_mtime(&log, &(now + Duration::minutes(10)));

    let config = write_config(&fixture, &format!("log_path = \"{}\"\n", fixture.glob()));

    fixture
        .raw_command()
        .args(["--config", config.as_str(), "run-backup", "* * * * *"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("OK -"));
}

#[test]
fn test_thresholds_from_config_file() {
    let fixture = LogFixture::new();
    let now = Local::now();

    let stale = now - Duration::minutes(40);
    let log = fixture.write_log("syslog", &[cron_line(&stale, "run-backup")]);
    fixture.set_mtime(&log, &(now + Duration::minutes(10)));

    let config = write_config(
        &fixture,
        &format!(
            "log_path = \"{}\"\nwarning_seconds = 60\ncritical_seconds = 120\n",
            fixture.glob()
        ),
    );

    fixture
        .raw_command()
        .args(["--config", config.as_str(), "run-backup", "* * * * *"])
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("CRITICAL -"));
}

#[test]
fn test_flags_override_config_values() {
    let fixture = LogFixture::new();
    let now = Local::now();
    let minute = now.with_second(0).unwrap();

    let log = fixture.write_log("syslog", &[noise_line(&minute), cron_line(&now, "run-backup")]);
    fixture.set_mtime(&log, &(now + Duration::minutes(10)));

    // The config points at a directory with no logs; the flag must win.
    let empty = fixture.path().join("empty");
    fs::create_dir(&empty).expect("Failed to create empty dir");
    let config = write_config(
        &fixture,
        &format!("log_path = \"{}/syslog*\"\n", empty.display()),
    );

    let glob = fixture.glob();
    fixture
        .raw_command()
        .args(["--config", config.as_str(), "--log-path", glob.as_str()])
        .args(["run-backup", "* * * * *"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("OK -"));
}

#[test]
fn test_invalid_config_file_is_unknown() {
    let fixture = LogFixture::new();
    let config = write_config(&fixture, "warning_seconds = \"soon\"\n");

    fixture
        .raw_command()
        .args(["--config", config.as_str(), "run-backup", "* * * * *"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN -"));
}

#[test]
fn test_missing_config_file_is_unknown() {
    let fixture = LogFixture::new();
    let config = fixture.path().join("nonexistent.toml").display().to_string();

    fixture
        .raw_command()
        .args(["--config", config.as_str()])
        .args(["run-backup", "* * * * *"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("UNKNOWN -"));
}

#[test]
fn test_year_carrying_log_format_without_inference() {
    let fixture = LogFixture::new();
    let now = Local::now();
    let minute = now.with_second(0).unwrap();

    let iso = |t: &DateTime<Local>| t.format("%Y-%m-%dT%H:%M:%S").to_string();
    let log = fixture.write_log(
        "syslog",
        &[
            format!("{} testhost rsyslogd: log opened", iso(&minute)),
            format!("{} testhost CRON[2112]: (root) CMD (run-backup)", iso(&now)),
        ],
    );
    fixture.set_mtime(&log, &(now + Duration::minutes(10)));

    let config = write_config(
        &fixture,
        &format!(
            r#"log_path = "{}"

[timestamp]
pattern = '^[0-9]{{4}}-[0-9]{{2}}-[0-9]{{2}}T[0-9]{{2}}:[0-9]{{2}}:[0-9]{{2}}'
format = "%Y-%m-%dT%H:%M:%S"
year_inference = false
"#,
            fixture.glob()
        ),
    );

    fixture
        .raw_command()
        .args(["--config", config.as_str(), "run-backup", "* * * * *"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("OK -"));
}
