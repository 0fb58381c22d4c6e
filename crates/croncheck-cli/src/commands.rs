use crate::args::Cli;
use anyhow::Result;
use chrono::Local;
use croncheck_core::{CheckConfig, CheckResult, Status, run_check};

/// Resolve the configuration and run the check pipeline.
///
/// Always produces a result: configuration trouble is itself a terminal
/// UNKNOWN, never a crash or a missing status line.
pub fn run(cli: Cli) -> CheckResult {
    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(err) => return CheckResult::new(Status::Unknown, format!("{:#}", err)),
    };

    let report = run_check(&config, &cli.command, &cli.schedule, Local::now());

    if cli.verbose {
        for line in &report.trace {
            eprintln!("{}", line);
        }
    }

    report.result
}

/// Layer the configuration: file values (if any) under command-line flags.
fn build_config(cli: &Cli) -> Result<CheckConfig> {
    let mut config = match &cli.config {
        Some(path) => CheckConfig::load_from(path)?,
        None => CheckConfig::default(),
    };

    if let Some(log_path) = &cli.log_path {
        config.log_path = log_path.clone();
    }
    if let Some(warning) = cli.warning {
        config.warning_seconds = warning;
    }
    if let Some(critical) = cli.critical {
        config.critical_seconds = critical;
    }

    Ok(config)
}
