use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "croncheck")]
#[command(about = "Check that a cron job ran when its schedule says it should", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The job's command line, escaped exactly as it appears in the crontab
    pub command: String,

    /// Cron schedule expression (5 fields, or 6 with a leading seconds field)
    pub schedule: String,

    /// Deviation in seconds before the check turns WARNING (default 1800)
    #[arg(short = 'w', long = "warning", value_name = "SECONDS")]
    pub warning: Option<i64>,

    /// Deviation in seconds before the check turns CRITICAL (default 3600)
    #[arg(short = 'c', long = "critical", value_name = "SECONDS")]
    pub critical: Option<i64>,

    /// Glob pattern over the rotated log files (default /var/log/syslog*)
    #[arg(long = "log-path", value_name = "GLOB")]
    pub log_path: Option<String>,

    /// Load check configuration from a TOML file; flags override its values
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print each pipeline stage to stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
