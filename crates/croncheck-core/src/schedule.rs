use crate::error::{CheckError, Result};
use chrono::{DateTime, Duration, Local};
use croner::Cron;

/// How far back `previous_execution` searches before declaring the
/// schedule dead. Covers leap-year-only schedules.
const MAX_LOOKBACK_DAYS: i64 = 1830;

/// A parsed cron schedule expression.
///
/// Accepts the standard five fields, or six with a leading seconds field.
pub struct Schedule {
    expression: String,
    cron: Cron,
}

impl Schedule {
    pub fn parse(expression: &str) -> Result<Self> {
        let cron = Cron::new(expression)
            .with_seconds_optional()
            .parse()
            .map_err(|e| CheckError::InvalidSchedule {
                expression: expression.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Schedule {
            expression: expression.to_string(),
            cron,
        })
    }

    /// The latest instant at or before `now` at which this schedule fires,
    /// evaluated in local wall-clock time.
    ///
    /// croner only searches forward, so the window start is pushed back
    /// (doubling each round) until an occurrence lands inside the window,
    /// then the occurrences are walked forward to the last one not past
    /// `now`.
    pub fn previous_execution(&self, now: &DateTime<Local>) -> Result<DateTime<Local>> {
        let max_lookback = Duration::days(MAX_LOOKBACK_DAYS);
        let mut lookback = Duration::minutes(1);

        loop {
            let start = *now - lookback;
            if let Ok(first) = self.cron.find_next_occurrence(&start, true) {
                if first <= *now {
                    let mut last = first;
                    while let Ok(next) = self.cron.find_next_occurrence(&last, false) {
                        if next > *now {
                            break;
                        }
                        last = next;
                    }
                    return Ok(last);
                }
            }
            if lookback >= max_lookback {
                return Err(CheckError::InvalidSchedule {
                    expression: self.expression.clone(),
                    reason: format!("no execution within the last {} days", MAX_LOOKBACK_DAYS),
                });
            }
            lookback = max_lookback.min(lookback * 2);
        }
    }
}
