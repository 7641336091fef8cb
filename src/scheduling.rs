//! Pure date functions for birthday reminder scheduling.
//!
//! Everything here takes explicit dates; the current date is an input, not
//! something read from the clock, so the window logic is directly testable
//! against fixed calendars.

use crate::domain::Birthday;
use chrono::{Datelike, Duration, NaiveDate};

/// How many days ahead of today a birthday counts as upcoming.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// The next occurrence of a birthday on or after `today`.
///
/// This year's occurrence is used unless it has already passed, in which
/// case the date rolls forward to next year's occurrence. A birthday
/// earlier this year than `today` is never flagged retroactively.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> NaiveDate {
    let occurrence = birthday.occurrence_in(today.year());
    if occurrence < today {
        birthday.occurrence_in(today.year() + 1)
    } else {
        occurrence
    }
}

/// The date a congratulation should fire for a given birthday occurrence.
///
/// Saturday and Sunday occurrences shift forward to the following Monday;
/// weekdays pass through unchanged.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    // 0 = Monday .. 6 = Sunday
    let weekday_index = i64::from(occurrence.weekday().num_days_from_monday());
    if weekday_index >= 5 {
        occurrence + Duration::days(7 - weekday_index)
    } else {
        occurrence
    }
}
