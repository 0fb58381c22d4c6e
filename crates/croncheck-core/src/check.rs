use crate::classify::classify;
use crate::command::build_search_pattern;
use crate::config::CheckConfig;
use crate::error::{CheckError, CheckResult, Result};
use crate::extract::{find_execution_line, first_line};
use crate::logfile::select_log_file;
use crate::schedule::Schedule;
use crate::timestamp::parse_log_timestamp;
use chrono::{DateTime, Duration, Local};

/// Outcome of one check invocation: the terminal result plus one trace
/// line per pipeline stage for verbose output.
#[derive(Debug)]
pub struct CheckReport {
    pub result: CheckResult,
    pub trace: Vec<String>,
}

/// Run the whole decision pipeline once.
///
/// Never fails: every stage error is folded into the terminal status it
/// maps to, so the caller always has exactly one result to report.
pub fn run_check(
    config: &CheckConfig,
    command: &str,
    schedule_expression: &str,
    now: DateTime<Local>,
) -> CheckReport {
    let mut trace = Vec::new();
    let result = match pipeline(config, command, schedule_expression, now, &mut trace) {
        Ok(result) => result,
        Err(err) => CheckResult::from(err),
    };
    CheckReport { result, trace }
}

fn pipeline(
    config: &CheckConfig,
    command: &str,
    schedule_expression: &str,
    now: DateTime<Local>,
    trace: &mut Vec<String>,
) -> Result<CheckResult> {
    let schedule = Schedule::parse(schedule_expression)?;
    let expected = schedule.previous_execution(&now)?.naive_local();
    trace.push(format!("expected execution: {}", expected));

    let candidate = select_log_file(&config.log_path, &expected)?.ok_or_else(|| {
        CheckError::NoLogFileFound {
            pattern: config.log_path.clone(),
            expected,
        }
    })?;
    trace.push(format!(
        "log file: {} (modified {})",
        candidate.path.display(),
        candidate.modified
    ));

    // The selected file only helps if it reaches back to the expected
    // instant; a too-short retention window cannot prove anything.
    let first = first_line(&candidate.path)?.ok_or_else(|| CheckError::EmptyLogFile {
        path: candidate.path.clone(),
    })?;
    let first_seen = parse_log_timestamp(&config.timestamp, &first, &candidate.modified)?;
    if first_seen > expected {
        return Err(CheckError::LogWindowTooShort {
            first: first_seen,
            expected,
        });
    }

    let pattern = build_search_pattern(&config.log_line, command)?;
    let line = find_execution_line(&candidate.path, &pattern)?.ok_or_else(|| {
        CheckError::ExecutionNotFound {
            path: candidate.path.clone(),
        }
    })?;
    trace.push(format!("matched line: {}", line));

    let actual = parse_log_timestamp(&config.timestamp, &line, &candidate.modified)?;
    trace.push(format!("actual execution: {}", actual));
    trace.push(format!(
        "difference: {}s",
        (actual - expected).abs().num_seconds()
    ));

    Ok(classify(
        &expected,
        &actual,
        Duration::seconds(config.warning_seconds),
        Duration::seconds(config.critical_seconds),
    ))
}
