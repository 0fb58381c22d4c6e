use crate::error::{CheckResult, Status};
use chrono::{Duration, NaiveDateTime};

/// Grade the deviation between the expected and the recorded execution.
///
/// Lateness and earliness count the same: a job firing far ahead of its
/// schedule is as suspicious as one firing late. The caller is expected to
/// configure `warning <= critical`; the classifier does not police that.
pub fn classify(
    expected: &NaiveDateTime,
    actual: &NaiveDateTime,
    warning: Duration,
    critical: Duration,
) -> CheckResult {
    let difference = (*actual - *expected).abs();

    if difference >= critical {
        CheckResult::new(
            Status::Critical,
            format!(
                "last execution should have been at {}, but was at {}",
                expected, actual
            ),
        )
    } else if difference >= warning {
        CheckResult::new(
            Status::Warning,
            format!(
                "last execution should have been at {}, but was at {}",
                expected, actual
            ),
        )
    } else {
        CheckResult::new(Status::Ok, format!("last execution was at {}", actual))
    }
}
