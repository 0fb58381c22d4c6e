use crate::config::TimestampFormat;
use crate::error::{CheckError, Result};
use chrono::{Datelike, NaiveDateTime};
use regex::Regex;

/// Reconstruct the instant a log line was written.
///
/// The timestamp text is extracted from the start of the line with the
/// configured pattern. Syslog timestamps carry no year, so one is attached
/// from `year_source` — the containing file's modification time. A file
/// written across a year rollover therefore misattributes the year of its
/// pre-rollover lines; that limitation is inherent to the strategy and
/// deliberately kept.
///
/// With `year_inference` disabled the configured format must parse a
/// complete timestamp (i.e. carry `%Y`) and `year_source` is ignored.
pub fn parse_log_timestamp(
    format: &TimestampFormat,
    line: &str,
    year_source: &NaiveDateTime,
) -> Result<NaiveDateTime> {
    let pattern = Regex::new(&format.pattern)?;
    let matched = pattern
        .find(line)
        .ok_or_else(|| CheckError::UnparsableTimestamp {
            line: line.to_string(),
        })?;

    let parsed = if format.year_inference {
        let composed = format!("{} {}", matched.as_str(), year_source.year());
        let with_year = format!("{} %Y", format.format);
        NaiveDateTime::parse_from_str(&composed, &with_year)
    } else {
        NaiveDateTime::parse_from_str(matched.as_str(), &format.format)
    };

    parsed.map_err(|_| CheckError::UnparsableTimestamp {
        line: line.to_string(),
    })
}
